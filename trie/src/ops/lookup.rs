//! The path-lookup transformer.
//!
//! A pure read: no node is ever constructed or cloned past an `Rc::clone`
//! of what's already there. Mirrors `insert`'s depth bookkeeping so the
//! two transformers agree on what "the bit at this depth" means.

use crate::bits::BitSequence;
use crate::compat::Rc;
use crate::consts::{KEY_BITS, STEM_BITS};
use crate::node::Node;
use crate::TrieError;

/// `get(root, key)`: `Some(value)` if `key` was last `put` with `value`,
/// `None` if it was never inserted or its slot is currently empty. `key`
/// must be exactly `KEY_BITS` long.
pub fn get(root: &Rc<Node>, key: &BitSequence) -> Result<Option<Vec<u8>>, TrieError> {
    if key.length() != KEY_BITS {
        return Err(TrieError::InvalidInput);
    }
    lookup_at(root, -1, key)
}

fn lookup_at(node: &Rc<Node>, depth: isize, path: &BitSequence) -> Result<Option<Vec<u8>>, TrieError> {
    match &**node {
        Node::Internal { left, right, .. } => {
            let d = depth + 1;
            if path.get(d)? {
                lookup_at(right, d, path)
            } else {
                lookup_at(left, d, path)
            }
        }

        Node::Stem { stem, children, .. } => {
            let key_stem = path.slice(0, STEM_BITS)?;
            if *stem != key_stem {
                // The stored stem diverges from the key before the key
                // even reaches its suffix: no slot for it exists here.
                return Ok(None);
            }
            let suffix = path.slice(STEM_BITS, KEY_BITS)?.to_int()? as usize;
            let d = depth + 1;
            lookup_at(&children[suffix], d, path)
        }

        Node::Leaf { value } => Ok(value.clone()),

        Node::NullBranch | Node::NullLeaf => Ok(None),
    }
}
