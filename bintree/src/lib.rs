//! # bintree
//!
//! An owned binary-tree data model with validated construction and
//! level-order traversal.
//!
//! Each [`Node`] exclusively owns its children, so dropping the root
//! tears down the whole tree. The value `0` is reserved as the on-disk
//! padding word of the companion codec and is rejected at construction
//! time ([`RESERVED_VALUE`]).
//!
//! ```rust
//! use bintree::Node;
//!
//! let mut root = Node::new(1).unwrap();
//! root.set_left(Node::new(2).unwrap());
//! root.set_right(Node::new(3).unwrap());
//!
//! assert_eq!(root.value(), 1);
//! assert!(!root.is_leaf());
//! assert_eq!(root.left().unwrap().value(), 2);
//! ```

pub mod error;
pub mod node;
pub mod traverse;

pub use error::TreeError;
pub use node::{Node, RESERVED_VALUE};
pub use traverse::{Token, level_order, render};
