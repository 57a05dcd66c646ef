//! Drives a `Map` and a plain unbalanced binary search tree through the same random operations
//! and compares them after every step.

use llrb::Map;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{Config, LevelFilter, TestLogger};

type Tree = Option<Box<Oracle>>;

struct Oracle {
    key: u32,
    value: u64,
    left: Tree,
    right: Tree,
}

fn insert(tree: &mut Tree, key: u32, value: u64) -> Option<u64> {
    match *tree {
        None => {
            *tree = Some(Box::new(Oracle { key: key, value: value, left: None, right: None }));
            None
        }
        Some(ref mut node) =>
            if key < node.key {
                insert(&mut node.left, key, value)
            } else if key > node.key {
                insert(&mut node.right, key, value)
            } else {
                Some(std::mem::replace(&mut node.value, value))
            },
    }
}

fn remove_min(tree: &mut Tree) -> Option<(u32, u64)> {
    if tree.as_ref()?.left.is_some() {
        return tree.as_mut().and_then(|node| remove_min(&mut node.left));
    }

    tree.take().map(|node| {
        *tree = node.right;
        (node.key, node.value)
    })
}

fn remove(tree: &mut Tree, key: u32) -> Option<(u32, u64)> {
    let node = tree.as_mut()?;

    if key < node.key { return remove(&mut node.left, key); }
    if key > node.key { return remove(&mut node.right, key); }

    match remove_min(&mut node.right) {
        Some((succ_key, succ_value)) => {
            let key = std::mem::replace(&mut node.key, succ_key);
            let value = std::mem::replace(&mut node.value, succ_value);
            Some((key, value))
        }
        None => tree.take().map(|node| {
            *tree = node.left;
            (node.key, node.value)
        }),
    }
}

fn get(tree: &Tree, key: u32) -> Option<&u64> {
    let node = tree.as_ref()?;

    if key < node.key {
        get(&node.left, key)
    } else if key > node.key {
        get(&node.right, key)
    } else {
        Some(&node.value)
    }
}

fn entries(tree: &Tree, out: &mut Vec<(u32, u64)>) {
    if let Some(ref node) = *tree {
        entries(&node.left, out);
        out.push((node.key, node.value));
        entries(&node.right, out);
    }
}

fn height_bound(len: usize) -> usize {
    (2.0 * ((len + 1) as f64).log2()).floor() as usize
}

fn run(seed: u64, ops: usize, key_space: u32) {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());

    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = Map::new();
    let mut oracle: Tree = None;

    for step in 0..ops {
        let key = rng.gen_range(0..key_space);

        if rng.gen_bool(0.6) {
            let value = rng.gen::<u64>();
            assert_eq!(map.insert(key, value), insert(&mut oracle, key, value), "step {}", step);
        } else {
            assert_eq!(map.remove(&key), remove(&mut oracle, key), "step {}", step);
        }

        assert_eq!(map.get(&key), get(&oracle, key), "step {}", step);

        if step % 97 == 0 {
            let mut expected = vec![];
            entries(&oracle, &mut expected);
            assert!(map.iter().map(|(&k, &v)| (k, v)).eq(expected.iter().cloned()));

            let stats = map.check().unwrap();
            assert_eq!(stats.len, expected.len());
            assert!(map.height() <= height_bound(map.len()));
        }
    }

    let mut expected = vec![];
    entries(&oracle, &mut expected);
    assert_eq!(map.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn matches_unbalanced_tree_dense_keys() {
    run(42, 10_000, 512);
}

#[test]
fn matches_unbalanced_tree_sparse_keys() {
    run(7, 10_000, 1 << 20);
}

#[test]
fn drains_to_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut map = Map::new();
    let mut keys: Vec<u32> = (0..2_000).collect();

    for &key in &keys { map.insert(key, ()); }

    while !keys.is_empty() {
        let key = keys.swap_remove(rng.gen_range(0..keys.len()));
        assert_eq!(map.remove(&key), Some((key, ())));
        assert_eq!(map.remove(&key), None);
        assert!(map.check().is_ok());
    }

    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
}
