#![no_main]
use libfuzzer_sys::fuzz_target;
use ordered_btree::OrderedTree;
use std::collections::BTreeSet;

fuzz_target!(|data: (Vec<String>, u8)| {
    let min_degree = data.1.max(2);
    let mut m: BTreeSet<String> = BTreeSet::default();
    let mut t: OrderedTree<String> = OrderedTree::new(min_degree as i64).unwrap();

    for key in data.0 {
        m.insert(key.clone());
        t.insert(key);
    }

    // Check that the sets contain the same elements
    assert_eq!(m.len(), t.len());
    for k in m.iter() {
        assert!(t.contains(k));
    }
});
