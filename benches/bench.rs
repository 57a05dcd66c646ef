use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use llrb::Map;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SEED: u64 = 42;
const SIZES: [usize; 3] = [100, 10_000, 100_000];

fn random_map(n: usize, rng: &mut StdRng) -> Map<usize, usize> {
    let mut map = Map::new();

    for _ in 0..n {
        let i = rng.gen::<usize>() % n;
        map.insert(i, i);
    }

    map
}

fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(SEED);
            let mut map = random_map(n, &mut rng);

            b.iter(|| {
                let k = rng.gen::<usize>() % n;
                map.insert(k, k);
                map.remove(&k);
            });
            black_box(map);
        });

        group.bench_with_input(BenchmarkId::new("seq", n), &n, |b, &n| {
            let mut map: Map<usize, usize> = (0..n).map(|i| (i * 2, i * 2)).collect();
            let mut i = 1;

            b.iter(|| {
                map.insert(i, i);
                map.remove(&i);
                i = (i + 2) % n;
            });
            black_box(map);
        });
    }

    group.finish();
}

fn find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(SEED);
            let keys: Vec<usize> = (0..n).map(|_| rng.gen::<usize>() % n).collect();
            let map: Map<usize, usize> = keys.iter().map(|&k| (k, k)).collect();
            let mut i = 0;

            b.iter(|| {
                black_box(map.get(&keys[i]));
                i = (i + 1) % n;
            });
        });

        group.bench_with_input(BenchmarkId::new("seq", n), &n, |b, &n| {
            let map: Map<usize, usize> = (0..n).map(|i| (i, i)).collect();
            let mut i = 0;

            b.iter(|| {
                black_box(map.get(&i));
                i = (i + 1) % n;
            });
        });
    }

    group.finish();
}

fn iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("forward", n), &n, |b, &n| {
            let map = random_map(n, &mut StdRng::seed_from_u64(SEED));
            b.iter(|| for e in &map { black_box(e); });
        });

        group.bench_with_input(BenchmarkId::new("rev", n), &n, |b, &n| {
            let map = random_map(n, &mut StdRng::seed_from_u64(SEED));
            b.iter(|| for e in map.iter().rev() { black_box(e); });
        });
    }

    group.finish();
}

fn remove_min(c: &mut Criterion) {
    c.bench_function("remove_min/10000", |b| {
        let map: Map<usize, usize> = (0..10_000).map(|i| (i, i)).collect();

        b.iter_batched(|| map.clone(), |mut map| {
            while let Some(e) = map.remove_min() { black_box(e); }
        }, criterion::BatchSize::LargeInput);
    });
}

criterion_group!(benches, insert, find, iter, remove_min);
criterion_main!(benches);
