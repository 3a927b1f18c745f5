#![no_main]
use fake::{Fake, StringFaker};
use libfuzzer_sys::fuzz_target;
use ordered_btree::OrderedTree;
use rand::SeedableRng;

fuzz_target!(|seed: u64| {
    // Create a tree with random entries
    let n_entries = 2000;
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    const ASCII: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let id_faker = StringFaker::with(Vec::from(ASCII), 8..16);

    let mut btree: OrderedTree<String> = OrderedTree::new(4).unwrap();

    // Insert the strings
    for _ in 0..n_entries {
        btree.insert(id_faker.fake_with_rng(&mut rng));
    }
    // Generate and insert a known key
    let search_key: String = id_faker.fake_with_rng(&mut rng);

    btree.insert(search_key.clone());

    let found = btree.find(&search_key).unwrap();
    assert_eq!(&search_key, found.key());
});
