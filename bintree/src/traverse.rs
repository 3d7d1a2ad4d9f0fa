//! Level-order traversal with explicit absent-child markers.
//!
//! The walk mirrors the on-disk encoding exactly: every internal node
//! contributes a token for each of its two child slots, while a leaf
//! contributes only its own value and no child tokens. The codec
//! depends on this leaf rule; do not change it here without changing
//! the decoder's pairing loop to match.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::Node;

/// One slot visited by the level-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A present node's value.
    Value(u64),
    /// An absent child of some internal node.
    Absent,
}

/// Walk the tree breadth-first, leaf-suppressing, and collect one
/// [`Token`] per visited slot.
pub fn level_order(root: &Node) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut queue: VecDeque<Option<&Node>> = VecDeque::new();
    queue.push_back(Some(root));

    while let Some(slot) = queue.pop_front() {
        let node = match slot {
            None => {
                tokens.push(Token::Absent);
                continue;
            }
            Some(node) => node,
        };

        tokens.push(Token::Value(node.value()));

        // Leaves contribute no child slots.
        if node.is_leaf() {
            continue;
        }

        queue.push_back(node.left());
        queue.push_back(node.right());
    }

    tokens
}

/// Render the tree one token per line, `NULL` for absent slots.
pub fn render<W: Write>(writer: &mut W, root: &Node) -> io::Result<()> {
    for token in level_order(root) {
        match token {
            Token::Value(value) => writeln!(writer, "{}", value)?,
            Token::Absent => writeln!(writer, "NULL")?,
        }
    }
    Ok(())
}
