//! Reconstruction of a tree from its level-order word stream.

use std::collections::VecDeque;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use bintree::Node;
use log::debug;

use crate::{CodecError, PADDING_WORD, WORD_SIZE};

/// Rebuild a tree from its level-order word stream.
///
/// The first word is the root's value. After that the stream is
/// consumed in pairs: each pair fills the two child slots of the next
/// queued node, with [`PADDING_WORD`] meaning "no child here". The
/// loop stops when fewer than two words remain; nodes still queued at
/// that point are leaves, because the encoder never wrote pairs for
/// them.
///
/// Fails with [`CodecError::EmptyStream`] on empty input,
/// [`CodecError::TrailingWord`] if exactly one word is left over, and
/// [`CodecError::StrayWords`] if words remain after every child slot
/// was filled.
pub fn decode(words: &[u64]) -> Result<Node, CodecError> {
    if words.is_empty() {
        return Err(CodecError::EmptyStream);
    }

    // First pass: pair words with queued parents, index-based so the
    // nodes can be assembled bottom-up afterwards. Children always get
    // a higher index than their parent.
    let mut values = vec![words[0]];
    let mut children: Vec<(Option<usize>, Option<usize>)> = vec![(None, None)];
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(0);

    let mut rest = &words[1..];
    while rest.len() >= 2 {
        let (left, right) = (rest[0], rest[1]);
        rest = &rest[2..];

        let current = match queue.pop_front() {
            Some(index) => index,
            None => return Err(CodecError::StrayWords(rest.len() + 2)),
        };

        if left != PADDING_WORD {
            let index = values.len();
            values.push(left);
            children.push((None, None));
            children[current].0 = Some(index);
            queue.push_back(index);
        }
        if right != PADDING_WORD {
            let index = values.len();
            values.push(right);
            children.push((None, None));
            children[current].1 = Some(index);
            queue.push_back(index);
        }
    }

    if let [lone] = rest {
        return Err(CodecError::TrailingWord(*lone));
    }

    // Second pass: build nodes in reverse index order, so both
    // children exist before their parent is constructed.
    let mut slots: Vec<Option<Node>> = values.iter().map(|_| None).collect();
    for index in (1..values.len()).rev() {
        let (left, right) = children[index];
        let left = left.and_then(|child| slots[child].take());
        let right = right.and_then(|child| slots[child].take());
        slots[index] = Some(Node::with_children(values[index], left, right)?);
    }

    let (left, right) = children[0];
    let left = left.and_then(|child| slots[child].take());
    let right = right.and_then(|child| slots[child].take());
    Ok(Node::with_children(values[0], left, right)?)
}

/// Read a raw word stream to end-of-input and decode it.
///
/// The byte length must be a whole number of words; anything else
/// fails with [`CodecError::TruncatedWord`].
pub fn read_tree<R: Read>(reader: &mut R) -> Result<Node, CodecError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() % WORD_SIZE != 0 {
        return Err(CodecError::TruncatedWord(bytes.len() % WORD_SIZE));
    }

    let words: Vec<u64> = bytemuck::pod_collect_to_vec(&bytes);
    decode(&words)
}

/// Decode the tree stored in the file at `path`.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Node, CodecError> {
    let mut file = File::open(&path)?;
    let root = read_tree(&mut file)?;
    debug!("loaded tree from {}", path.as_ref().display());
    Ok(root)
}
