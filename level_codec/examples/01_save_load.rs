//! End-to-end demo: build a tree, print it, save it to `tree.bin`,
//! load it back and print it again.

use bintree::{Node, render};
use level_codec::{load_from_file, save_to_file};
use std::io;

/// The demonstration tree:
///
/// ```text
///          1
///        /   \
///      2       3
///    /       /   \
///   4       6     78
/// ```
fn demo_tree() -> Node {
    let two = Node::with_children(2, Some(Node::new(4).unwrap()), None).unwrap();
    let three = Node::with_children(
        3,
        Some(Node::new(6).unwrap()),
        Some(Node::new(78).unwrap()),
    )
    .unwrap();
    Node::with_children(1, Some(two), Some(three)).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();

    let root = demo_tree();
    println!("original tree:");
    render(&mut stdout, &root)?;

    save_to_file("tree.bin", &root)?;

    let reloaded = load_from_file("tree.bin")?;
    println!("reloaded tree:");
    render(&mut stdout, &reloaded)?;

    assert_eq!(root, reloaded);
    std::fs::remove_file("tree.bin")?;
    Ok(())
}
