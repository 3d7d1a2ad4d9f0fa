//! Level-order encoding of a tree into a word stream.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use bintree::{Node, Token, level_order};
use log::debug;

use crate::{CodecError, PADDING_WORD};

/// Serialize a tree into its level-order word stream.
///
/// The stream carries no length prefix and no terminator. Absent
/// children of internal nodes become [`PADDING_WORD`]; leaves emit
/// only their value and no child pair, so the stream ends exactly
/// where the decoder's pairing loop runs out of input.
///
/// # Examples
///
/// ```
/// use bintree::Node;
/// use level_codec::encode;
///
/// let root = Node::with_children(5, Some(Node::new(9).unwrap()), None).unwrap();
/// assert_eq!(encode(&root), vec![5, 9, 0]);
/// ```
pub fn encode(root: &Node) -> Vec<u64> {
    level_order(root)
        .into_iter()
        .map(|token| match token {
            Token::Value(value) => value,
            Token::Absent => PADDING_WORD,
        })
        .collect()
}

/// Encode `root` and write the raw words to `writer`.
pub fn write_tree<W: Write>(writer: &mut W, root: &Node) -> Result<(), CodecError> {
    let words = encode(root);
    writer.write_all(bytemuck::cast_slice(&words))?;
    Ok(())
}

/// Encode `root` into the file at `path`, creating or truncating it.
///
/// Open and write failures propagate; the handle is closed on every
/// path, including errors.
pub fn save_to_file<P: AsRef<Path>>(path: P, root: &Node) -> Result<(), CodecError> {
    let mut file = File::create(&path)?;
    write_tree(&mut file, root)?;
    file.flush()?;
    debug!("saved tree to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node {
        // 1 -> (2 -> (4, -), 3 -> (6, 78))
        let two = Node::with_children(2, Some(Node::new(4).unwrap()), None).unwrap();
        let three = Node::with_children(
            3,
            Some(Node::new(6).unwrap()),
            Some(Node::new(78).unwrap()),
        )
        .unwrap();
        Node::with_children(1, Some(two), Some(three)).unwrap()
    }

    #[test]
    fn single_node_encodes_to_one_word() {
        let root = Node::new(42).unwrap();
        assert_eq!(encode(&root), vec![42]);
    }

    #[test]
    fn left_only_child_pads_right_slot() {
        let root = Node::with_children(1, Some(Node::new(2).unwrap()), None).unwrap();
        assert_eq!(encode(&root), vec![1, 2, 0]);
    }

    #[test]
    fn right_only_child_pads_left_slot() {
        let root = Node::with_children(1, None, Some(Node::new(2).unwrap())).unwrap();
        assert_eq!(encode(&root), vec![1, 0, 2]);
    }

    #[test]
    fn sample_tree_stream_is_pinned() {
        // Node 2 is not a leaf (it has 4), so its missing right child
        // still emits one padding word; leaves 4, 6 and 78 emit none.
        assert_eq!(encode(&sample_tree()), vec![1, 2, 3, 4, 0, 6, 78]);
    }

    #[test]
    fn write_tree_produces_word_sized_bytes() {
        let mut out = Vec::new();
        write_tree(&mut out, &sample_tree()).unwrap();
        assert_eq!(out.len(), 7 * crate::WORD_SIZE);
        assert_eq!(&out[..crate::WORD_SIZE], &1u64.to_ne_bytes());
    }
}
