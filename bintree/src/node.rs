//! Owned binary-tree nodes with validated values.

use crate::TreeError;

/// Reserved value used on disk to mark an absent child.
///
/// A real payload value equal to this word would be indistinguishable
/// from padding after a round trip, so construction rejects it.
pub const RESERVED_VALUE: u64 = 0;

/// A binary-tree node owning both of its optional children.
///
/// Equality is deep and structural: two nodes compare equal iff their
/// subtrees have the same shape and the same values at every position.
///
/// # Examples
///
/// ```
/// use bintree::{Node, TreeError};
///
/// let mut root = Node::new(10).unwrap();
/// root.set_left(Node::new(20).unwrap());
///
/// assert!(root.right().is_none());
/// assert!(root.left().unwrap().is_leaf());
///
/// // The padding word is not a legal value.
/// assert!(matches!(Node::new(0), Err(TreeError::ReservedValue(0))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: u64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Create a leaf node.
    ///
    /// Fails with [`TreeError::ReservedValue`] if `value` equals
    /// [`RESERVED_VALUE`].
    pub fn new(value: u64) -> Result<Self, TreeError> {
        if value == RESERVED_VALUE {
            return Err(TreeError::ReservedValue(value));
        }
        Ok(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// Create a node that takes ownership of both child slots at once.
    pub fn with_children(
        value: u64,
        left: Option<Node>,
        right: Option<Node>,
    ) -> Result<Self, TreeError> {
        let mut node = Node::new(value)?;
        node.left = left.map(Box::new);
        node.right = right.map(Box::new);
        Ok(node)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Attach `child` as the left subtree, replacing any previous one.
    pub fn set_left(&mut self, child: Node) {
        self.left = Some(Box::new(child));
    }

    /// Attach `child` as the right subtree, replacing any previous one.
    pub fn set_right(&mut self, child: Node) {
        self.right = Some(Box::new(child));
    }

    /// A node with no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
