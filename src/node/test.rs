use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use crate::map::Map;
use super::{Color, Link, Node, Stats, rotate_left, rotate_right};
use super::Color::{Black, Red};

/// An operation on a `Map`.
#[derive(Clone, Debug)]
enum Op<K> where K: Clone + Ord {
    /// Insert a key into the map.
    Insert(K),
    /// Remove the key at index `n % map.len()` from the map.
    Remove(usize),
    /// Remove a key that may or may not be in the map.
    RemoveKey(K),
    RemoveMin,
    RemoveMax,
}

impl<K> Arbitrary for Op<K> where K: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Op<K> {
        match u8::arbitrary(gen) % 8 {
            0..=3 => Op::Insert(K::arbitrary(gen)),
            4 | 5 => Op::Remove(usize::arbitrary(gen)),
            6 => Op::RemoveKey(K::arbitrary(gen)),
            _ => if bool::arbitrary(gen) { Op::RemoveMin } else { Op::RemoveMax },
        }
    }
}

impl<K> Op<K> where K: Clone + Ord {
    /// Perform the operation on the given map.
    fn exec(self, map: &mut Map<K, ()>) {
        match self {
            Op::Insert(key) => { map.insert(key, ()); }
            Op::Remove(index) => if !map.is_empty() {
                let key = map.iter().nth(index % map.len()).unwrap().0.clone();
                assert!(map.remove(&key).is_some());
            },
            Op::RemoveKey(key) => { map.remove(&key); }
            Op::RemoveMin => { map.remove_min(); }
            Op::RemoveMax => { map.remove_max(); }
        }
    }
}

// Mirrors `check`, but with plain assertions so a failure points at the offending node.
fn assert_llrb_tree<K, V>(map: &Map<K, V>) where K: Ord {
    fn black_height<K, V>(link: &Link<K, V>, parent: Option<&Node<K, V>>) -> usize where K: Ord {
        match *link {
            None => 1,
            Some(ref node) => {
                if let Some(left) = node.left.as_deref() { assert!(left.key < node.key); }
                if let Some(right) = node.right.as_deref() { assert!(right.key > node.key); }

                assert!(node.right.as_ref().map_or(true, |right| right.color == Black),
                        "right-leaning red link");

                if node.color == Red {
                    assert!(parent.map_or(false, |parent| parent.color == Black),
                            "red root or two consecutive red links");
                }

                let left = black_height(&node.left, Some(node));
                let right = black_height(&node.right, Some(node));
                assert_eq!(left, right, "unbalanced black height");

                if node.color == Black { left + 1 } else { left }
            }
        }
    }

    black_height(map.root(), None);
}

// The tree's shape as a pre-order listing of keys, colors and depths.
fn shape<K, V>(map: &Map<K, V>) -> Vec<(K, Color, usize)> where K: Clone + Ord {
    fn walk<K, V>(link: &Link<K, V>, depth: usize, out: &mut Vec<(K, Color, usize)>)
        where K: Clone {

        if let Some(ref node) = *link {
            out.push((node.key.clone(), node.color, depth));
            walk(&node.left, depth + 1, out);
            walk(&node.right, depth + 1, out);
        }
    }

    let mut out = vec![];
    walk(map.root(), 0, &mut out);
    out
}

fn height_bound(len: usize) -> usize {
    (2.0 * ((len + 1) as f64).log2()).floor() as usize
}

#[quickcheck]
fn random_ops_preserve_invariants(ops: Vec<Op<u8>>) -> TestResult {
    let mut map = Map::new();

    for op in ops {
        op.exec(&mut map);
        assert_llrb_tree(&map);
    }

    match map.check() {
        Ok(stats) => TestResult::from_bool(stats.len == map.len() &&
                                           stats.height == map.height() &&
                                           map.height() <= height_bound(map.len())),
        Err(e) => TestResult::error(e.to_string()),
    }
}

#[quickcheck]
fn inserting_keeps_black_height_logarithmic(keys: Vec<u32>) -> bool {
    let map: Map<u32, ()> = keys.into_iter().map(|k| (k, ())).collect();
    let stats = map.check().unwrap();
    stats.black_height <= height_bound(map.len()) / 2 + 1 && stats.height <= height_bound(map.len())
}

#[quickcheck]
fn removing_absent_key_leaves_shape(keys: Vec<u16>, absent: u16) -> TestResult {
    let mut map: Map<u16, ()> = keys.into_iter().map(|k| (k, ())).collect();
    if map.contains_key(&absent) { return TestResult::discard(); }

    let before = shape(&map);
    let len = map.len();
    let removed = map.remove(&absent);

    TestResult::from_bool(removed.is_none() && map.len() == len && shape(&map) == before)
}

#[test]
fn sorted_insertions_stay_balanced() {
    let mut asc = Map::new();
    let mut desc = Map::new();

    for i in 0..1000u32 {
        asc.insert(i, ());
        desc.insert(999 - i, ());

        assert_llrb_tree(&asc);
        assert_llrb_tree(&desc);
        assert!(asc.height() <= height_bound(asc.len()));
        assert!(desc.height() <= height_bound(desc.len()));
    }

    assert!(asc.iter().map(|e| *e.0).eq(0..1000));
    assert!(desc.iter().map(|e| *e.0).eq(0..1000));
}

#[test]
fn removals_from_both_ends_stay_balanced() {
    let mut map: Map<u32, u32> = (0..512).map(|i| (i, i * 10)).collect();
    let (mut lo, mut hi) = (0, 511);

    while !map.is_empty() {
        assert_eq!(map.remove_min(), Some((lo, lo * 10)));
        lo += 1;
        assert_llrb_tree(&map);

        if let Some(max) = map.remove_max() {
            assert_eq!(max, (hi, hi * 10));
            hi -= 1;
            assert_llrb_tree(&map);
        }
    }

    assert_eq!(map.root().is_none(), true);
    assert_eq!(map.check(), Ok(Stats::default()));
}

#[test]
fn removing_interior_keys() {
    let mut map: Map<u32, ()> = (0..200).map(|i| (i, ())).collect();

    for i in (0..200).filter(|i| i % 3 == 1) {
        assert_eq!(map.remove(&i), Some((i, ())));
        assert_llrb_tree(&map);
    }

    assert!(map.iter().map(|e| *e.0).eq((0..200).filter(|i| i % 3 != 1)));
}

#[test]
fn root_is_black() {
    let mut map = Map::new();

    for i in 0..64u8 {
        map.insert(i, ());
        assert_eq!(map.root().as_ref().map(|root| root.color), Some(Black));
    }

    for i in 0..63u8 {
        map.remove(&i);
        assert_eq!(map.root().as_ref().map(|root| root.color), Some(Black));
    }
}

#[test]
fn three_inserts_balance_to_a_single_black_root() {
    // ascending, descending and zig-zag insertions all end as one black node with two black
    // children
    for keys in &[[1, 2, 3], [3, 2, 1], [3, 1, 2], [1, 3, 2]] {
        let map: Map<i32, ()> = keys.iter().map(|&k| (k, ())).collect();
        assert_eq!(shape(&map), [(2, Black, 0), (1, Black, 1), (3, Black, 1)]);
    }

    let map: Map<i32, ()> = [2, 1].iter().map(|&k| (k, ())).collect();
    assert_eq!(shape(&map), [(2, Black, 0), (1, Red, 1)]);

    let map: Map<i32, ()> = [1, 2].iter().map(|&k| (k, ())).collect();
    assert_eq!(shape(&map), [(2, Black, 0), (1, Red, 1)]);
}

#[test]
fn rotations_preserve_order() {
    let leaf = |key| Some(Box::new(Node { left: None, right: None, color: Black, key: key, value: () }));

    let mut node = Box::new(Node {
        left: leaf(1),
        right: Some(Box::new(Node { left: leaf(3), right: leaf(5), color: Red, key: 4, value: () })),
        color: Black,
        key: 2,
        value: (),
    });

    rotate_left(&mut node);
    assert_eq!((node.key, node.color), (4, Black));
    assert_eq!(node.left.as_ref().map(|n| (n.key, n.color)), Some((2, Red)));
    assert_eq!(node.left.as_ref().and_then(|n| n.right.as_ref()).map(|n| n.key), Some(3));
    assert_eq!(node.right.as_ref().map(|n| n.key), Some(5));

    rotate_right(&mut node);
    assert_eq!((node.key, node.color), (2, Black));
    assert_eq!(node.left.as_ref().map(|n| n.key), Some(1));
    assert_eq!(node.right.as_ref().map(|n| (n.key, n.color)), Some((4, Red)));
    assert_eq!(node.right.as_ref().and_then(|n| n.left.as_ref()).map(|n| n.key), Some(3));
}
