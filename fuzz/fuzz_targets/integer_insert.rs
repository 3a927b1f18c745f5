#![no_main]
use libfuzzer_sys::fuzz_target;

use ordered_btree::OrderedTree;
use std::collections::BTreeSet;

fuzz_target!(|data: (Vec<u32>, u8)| {
    let min_degree = data.1.max(2);
    let mut m = BTreeSet::default();
    let mut fixture = OrderedTree::new(min_degree as i64).unwrap();

    for key in data.0 {
        assert_eq!(m.insert(key), fixture.insert(key));
    }

    // Check len() function
    assert_eq!(m.len(), fixture.len());

    // find query for each entry
    for k in m.iter() {
        assert!(fixture.contains(k));
        let found = fixture.find(k).unwrap();
        assert_eq!(k, found.key());
    }

    // A tree consisting only of the root holds all elements in order
    if fixture.height() == 1 {
        let m: Vec<_> = m.into_iter().collect();
        assert_eq!(m.as_slice(), fixture.root().keys());
    }
});
