use dynpack::{MapError, OrderedMap, PackValue};

fn assert_index_consistent<K, V>(map: &OrderedMap<K, V>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for (i, (key, _)) in map.entries().iter().enumerate() {
        assert_eq!(map.find(key), Some(i), "index points elsewhere for {key:?}");
    }
}

#[test]
fn push_back_keeps_insertion_order() {
    let mut map = OrderedMap::new();
    map.push_back("z", 1).unwrap();
    map.push_back("a", 2).unwrap();
    map.push_back("m", 3).unwrap();
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, ["z", "a", "m"]);
    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, [1, 2, 3]);
    assert_index_consistent(&map);
}

#[test]
fn lookup_operations() {
    let mut map = OrderedMap::new();
    map.push_back("a", 10).unwrap();
    map.push_back("b", 20).unwrap();

    assert_eq!(map.find(&"b"), Some(1));
    assert_eq!(map.find(&"c"), None);
    assert!(map.contains_key(&"a"));
    assert_eq!(map.count(&"a"), 1);
    assert_eq!(map.count(&"zzz"), 0);
    assert_eq!(map.get(&"a"), Some(&10));
    assert_eq!(map.at(&"b"), Ok(&20));
    assert_eq!(map.at(&"c"), Err(MapError::KeyNotFound));

    *map.get_mut(&"a").unwrap() += 1;
    assert_eq!(map.at(&"a"), Ok(&11));
    *map.at_mut(&"b").unwrap() += 1;
    assert_eq!(map.get(&"b"), Some(&21));
}

#[test]
fn insert_at_front_middle_end() {
    let mut map = OrderedMap::new();
    map.push_back(10, 'a').unwrap();
    map.push_back(30, 'c').unwrap();

    map.insert_at(1, 20, 'b').unwrap();
    map.insert_at(0, 0, 'z').unwrap();
    map.insert_at(4, 40, 'd').unwrap();

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [0, 10, 20, 30, 40]);
    assert_index_consistent(&map);

    assert_eq!(map.insert_at(2, 10, 'x'), Err(MapError::DuplicateKey));
    assert_eq!(
        map.insert_at(6, 50, 'e'),
        Err(MapError::PositionOutOfBounds { pos: 6, len: 5 })
    );
    // Failed inserts leave the map untouched.
    assert_eq!(map.len(), 5);
    assert_index_consistent(&map);
}

#[test]
fn pop_back_and_clear() {
    let mut map = OrderedMap::new();
    map.push_back("x", 1).unwrap();
    map.push_back("y", 2).unwrap();

    assert_eq!(map.pop_back(), Some(("y", 2)));
    assert_eq!(map.find(&"y"), None);
    assert_index_consistent(&map);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.pop_back(), None);
    // Cleared keys are insertable again at fresh positions.
    map.push_back("x", 9).unwrap();
    assert_eq!(map.find(&"x"), Some(0));
}

#[test]
fn subscript_with_insertion_appends_defaults() {
    let mut map: OrderedMap<String, PackValue> = OrderedMap::new();
    map.push_back("present".into(), PackValue::Bool(true)).unwrap();

    assert!(map.get_or_insert_default("absent".into()).is_nil());
    *map.get_or_insert_default("absent".into()) = PackValue::UInt(1);

    assert_eq!(map.len(), 2);
    assert_eq!(map.find(&"absent".into()), Some(1));
    assert_eq!(map.get(&"absent".into()), Some(&PackValue::UInt(1)));
    assert_index_consistent(&map);
}

#[test]
fn bulk_construction_rebuilds_index() {
    let pairs: Vec<(u32, u32)> = (0..100).rev().map(|i| (i, i * 2)).collect();
    let map = OrderedMap::from_pairs(pairs).unwrap();
    assert_eq!(map.len(), 100);
    // Insertion order is the given order (descending keys).
    assert_eq!(map.entries()[0], (99, 198));
    assert_eq!(map.find(&0), Some(99));
    assert_index_consistent(&map);

    let dup = OrderedMap::from_pairs(vec![("k", 1), ("k", 2)]);
    assert_eq!(dup.err(), Some(MapError::DuplicateKey));

    let via_try: Result<OrderedMap<_, _>, _> = vec![("a", 1), ("b", 2)].try_into();
    assert_eq!(via_try.unwrap().len(), 2);
}

#[test]
fn iteration_is_positional() {
    let mut map = OrderedMap::new();
    for i in 0..5u8 {
        map.push_back(i, i * i).unwrap();
    }
    let collected: Vec<_> = map.iter().cloned().collect();
    assert_eq!(collected, vec![(0, 0), (1, 1), (2, 4), (3, 9), (4, 16)]);

    let owned: Vec<_> = map.into_iter().collect();
    assert_eq!(owned.len(), 5);
}

#[test]
fn index_invariant_under_op_sequences() {
    let mut map = OrderedMap::new();
    for i in 0..16u64 {
        map.push_back(i, ()).unwrap();
        assert_index_consistent(&map);
    }
    for pos in [0, 7, 18] {
        map.insert_at(pos, 100 + pos as u64, ()).unwrap();
        assert_index_consistent(&map);
    }
    for _ in 0..5 {
        map.pop_back();
        assert_index_consistent(&map);
    }
    map.clear();
    assert_index_consistent(&map);
    map.push_back(1, ()).unwrap();
    assert_index_consistent(&map);
}

#[test]
fn equality_ignores_index_and_respects_order() {
    let a = OrderedMap::from_pairs(vec![("x", 1), ("y", 2)]).unwrap();

    let mut b = OrderedMap::new();
    b.push_back("x", 1).unwrap();
    b.push_back("y", 2).unwrap();
    assert_eq!(a, b);

    let c = OrderedMap::from_pairs(vec![("y", 2), ("x", 1)]).unwrap();
    assert_ne!(a, c);
}
