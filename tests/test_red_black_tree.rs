use rand::{thread_rng, Rng};
use red_black_collections::red_black_tree::{
    Policy, RedBlackMap, RedBlackMultiset, RedBlackSet, RedBlackTree,
};
use red_black_collections::Error;
use simplelog::{Config, LevelFilter, TestLogger};
use std::collections::BTreeMap;
use std::vec::Vec;

const NUM_OF_OPERATIONS: usize = 10_000;

fn init_logging() {
    TestLogger::init(LevelFilter::Debug, Config::default()).ok();
}

#[test]
fn int_test_erase_from_twenty_one() {
    init_logging();
    let keys = [
        200, 100, 300, 555, 22, 333, 111, 23, 334, 112, 25, 336, 145, 19, 376, 147, 13, 370, 102,
        9, 399,
    ];
    let mut map = RedBlackMap::new();
    for key in keys.iter() {
        assert!(map.insert(*key, ()).unwrap().1);
        assert!(map.validate().is_ok());
    }
    assert_eq!(map.len(), 21);

    assert_eq!(map.erase(&399), Ok((399, ())));
    assert_eq!(map.len(), 20);
    assert!(map.find(&399) == map.end());
    assert_eq!(map.max(), Some(&555));
    assert!(map.validate().is_ok());
}

#[test]
fn int_test_erase_from_sequential() {
    init_logging();
    let mut set = RedBlackSet::new();
    for key in 1..=30 {
        set.insert(key).unwrap();
    }
    for key in &[17, 19, 11, 12] {
        assert_eq!(set.erase(key), Ok(*key));
        assert!(set.validate().is_ok());
    }
    assert_eq!(set.len(), 26);

    let keys = set.iter().cloned().collect::<Vec<u32>>();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys.len(), 26);
}

#[test]
fn int_test_multiset_equal_range() {
    init_logging();
    let mut multiset = RedBlackMultiset::new();
    for key in &[1, 2, 3, 3, 4] {
        multiset.insert(*key).unwrap();
    }

    assert_eq!(multiset.equal_range(&3).collect::<Vec<&u32>>(), vec![&3, &3]);

    let mut cursor = multiset.lower_bound(&3);
    let upper = multiset.upper_bound(&3);
    let mut between = Vec::new();
    while cursor != upper {
        between.push(*cursor.key().unwrap());
        cursor.move_next();
    }
    assert_eq!(between, vec![3, 3]);
    assert_eq!(upper.key(), Some(&4));
}

#[test]
fn int_test_merge_unique_and_multi() {
    init_logging();
    let mut set: RedBlackSet<u32> = (3..6).collect();
    let mut other: RedBlackSet<u32> = (1..4).collect();
    set.merge(&mut other).unwrap();
    assert_eq!(set.len(), 5);
    assert!(other.is_empty());
    assert!(set.validate().is_ok());

    let mut multiset: RedBlackMultiset<u32> = (3..6).collect();
    let mut other: RedBlackMultiset<u32> = (1..4).collect();
    multiset.merge(&mut other).unwrap();
    assert_eq!(multiset.len(), 6);
    assert_eq!(multiset.count(&3), 2);
    assert!(multiset.validate().is_ok());
}

#[test]
fn int_test_copy_then_clear() {
    init_logging();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::with_chunk_size(16);
    for _ in 0..1_000 {
        map.insert(rng.next_u32(), rng.next_u32()).unwrap();
    }
    let expected = map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<(u32, u32)>>();

    let copy = map.clone();
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
    assert_eq!(copy.len(), expected.len());
    assert_eq!(copy.into_iter().collect::<Vec<(u32, u32)>>(), expected);
}

#[test]
fn int_test_insert_is_idempotent() {
    let mut map = RedBlackMap::new();
    map.insert("key", 1).unwrap();
    map.insert("key", 2).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["key"], 1);

    map.insert_or_assign("key", 3).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["key"], 3);
}

#[test]
fn int_test_erase_missing_key() {
    let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
    map.insert(1, 1).unwrap();
    assert_eq!(map.erase(&2), Err(Error::KeyNotFound));
    assert_eq!(map.len(), 1);

    let mut multiset: RedBlackMultiset<u32> = RedBlackMultiset::new();
    assert_eq!(multiset.erase(&2), Err(Error::KeyNotFound));
}

#[test]
fn int_test_alloc_failure_leaves_map_intact() {
    init_logging();
    let mut map = RedBlackMap::with_chunk_size(usize::max_value() / 4);
    match map.insert(1u32, 1u32) {
        Err(Error::AllocError(_)) => {},
        Err(err) => panic!("expected an allocation error, got {:?}", err),
        Ok(_) => panic!("expected an allocation error"),
    }
    assert!(map.is_empty());
    assert_eq!(map.min(), None);
    assert!(map.validate().is_ok());

    let mut other: RedBlackMap<u32, u32> = (1..4).map(|key| (key, key)).collect();
    match map.merge(&mut other) {
        Err(Error::AllocError(_)) => {},
        result => panic!("expected an allocation error, got {:?}", result),
    }
    assert!(map.is_empty());
    assert!(map.validate().is_ok());
    assert_eq!(other.len(), 3);
    assert_eq!(
        other.iter().collect::<Vec<(&u32, &u32)>>(),
        vec![(&1, &1), (&2, &2), (&3, &3)],
    );
    assert!(other.validate().is_ok());

    let copy = map.clone();
    assert!(copy.is_empty());
}

#[test]
fn int_test_red_black_map() {
    init_logging();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 2_000u32);
        let val = rng.gen::<u32>();

        if rng.gen::<bool>() {
            map.insert_or_assign(key, val).unwrap();
            expected.insert(key, val);
        } else {
            assert_eq!(map.remove(&key), expected.remove(&key).map(|val| (key, val)));
        }
    }

    assert!(map.validate().is_ok());
    assert_eq!(map.len(), expected.len());
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );

    let mut keys = expected.keys().cloned().collect::<Vec<u32>>();
    thread_rng().shuffle(&mut keys);
    for key in keys {
        assert_eq!(map.get(&key), expected.get(&key));
        assert!(map.remove(&key).is_some());
        assert!(!map.contains_key(&key));
    }
    assert!(map.is_empty());
    assert_eq!(map.validate(), Ok(0));
}

#[test]
fn int_test_red_black_tree_invariants() {
    init_logging();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut tree = RedBlackTree::new(Policy::Multi);
    let mut expected = Vec::new();

    for i in 0..2_000u32 {
        let key = rng.gen_range(0, 64u32);
        if rng.gen_range(0, 3) == 0 {
            let removed = tree.remove(&key);
            let position = expected.iter().position(|pair: &(u32, u32)| pair.0 == key);
            match position {
                Some(index) => assert_eq!(removed, Some(expected.remove(index))),
                None => assert_eq!(removed, None),
            }
        } else {
            tree.insert(key, i).unwrap();
            let index = expected
                .iter()
                .position(|pair| pair.0 > key)
                .unwrap_or_else(|| expected.len());
            expected.insert(index, (key, i));
        }
        assert!(tree.validate().is_ok());
    }

    assert_eq!(tree.len(), expected.len());
    assert_eq!(tree.into_iter().collect::<Vec<(u32, u32)>>(), expected);
}

#[test]
fn int_test_red_black_multiset() {
    init_logging();
    let mut rng = thread_rng();
    let mut multiset = RedBlackMultiset::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 100u32);
        multiset.insert(key).unwrap();
        expected.push(key);
    }
    expected.sort();

    assert!(multiset.validate().is_ok());
    assert_eq!(multiset.len(), expected.len());
    for key in 0..100 {
        let count = expected.iter().filter(|k| **k == key).count();
        assert_eq!(multiset.count(&key), count);
        assert_eq!(multiset.equal_range(&key).count(), count);
    }
    assert_eq!(multiset.iter().cloned().collect::<Vec<u32>>(), expected);

    for key in 0..50 {
        let count = multiset.count(&key);
        match multiset.erase(&key) {
            Ok(removed) => assert_eq!(removed, count),
            Err(err) => {
                assert_eq!(err, Error::KeyNotFound);
                assert_eq!(count, 0);
            },
        }
        assert!(multiset.validate().is_ok());
    }
    assert!(multiset.min().map_or(true, |key| *key >= 50));
}
