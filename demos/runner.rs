use ordered_btree::{Error, OrderedTree};

fn main() -> std::result::Result<(), Error> {
    env_logger::init();

    let mut tree = OrderedTree::new(3)?;
    tree.insert_all([
        1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 22, 19, 25, 100, 88, 64, 65, 16,
    ]);
    print!("{}", tree);

    // Duplicates are ignored
    let mut tree_with_duplicate = OrderedTree::new(3)?;
    tree_with_duplicate.insert_all([
        1, 2, 2, 3, 25, 100, 88, 64, 65, 16, 4, 5, 6, 7, 8, 9, 11, 12, 22, 19,
    ]);
    print!("{}", tree_with_duplicate);

    match tree.find(&65) {
        Some(location) => println!("{}", location),
        None => println!("65 not found"),
    }
    Ok(())
}
