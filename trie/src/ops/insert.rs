//! The path-insert transformer.
//!
//! `put` returns a new root; every subtree the path doesn't touch is
//! `Rc`-shared with the previous root, not copied. Depth is a plain
//! recursion parameter rather than a mutable visitor field: each
//! node-kind match arm increments it exactly once.

use crate::bits::BitSequence;
use crate::compat::Rc;
use crate::consts::{KEY_BITS, STEM_BITS};
use crate::node::{CommitmentCell, Node};
use crate::TrieError;

/// `put(root, key, value)`: returns a new root such that
/// `get(new_root, key) == Some(value)` and every other previously-mapped
/// key is unaffected. `key` must be exactly `KEY_BITS` long.
pub fn put(root: &Rc<Node>, key: &BitSequence, value: &[u8]) -> Result<Rc<Node>, TrieError> {
    if key.length() != KEY_BITS {
        return Err(TrieError::InvalidInput);
    }
    insert_at(root, -1, key, value)
}

fn insert_at(node: &Rc<Node>, depth: isize, path: &BitSequence, value: &[u8]) -> Result<Rc<Node>, TrieError> {
    match &**node {
        Node::Internal { commitment, left, right } => {
            let d = depth + 1;
            if path.get(d)? {
                let new_right = insert_at(right, d, path, value)?;
                Ok(Node::internal(commitment.fork(), Rc::clone(left), new_right))
            } else {
                let new_left = insert_at(left, d, path, value)?;
                Ok(Node::internal(commitment.fork(), new_left, Rc::clone(right)))
            }
        }

        Node::Stem { stem, commitment, values_commitment, children } => {
            let new_stem = path.slice(0, STEM_BITS)?;
            if *stem == new_stem {
                // Case A: matching stem, descend to the suffix slot.
                let d = depth + 1;
                let suffix = path.slice(STEM_BITS, KEY_BITS)?.to_int()? as usize;
                let new_child = insert_at(&children[suffix], d, path, value)?;
                let mut new_children = children.clone();
                new_children[suffix] = new_child;
                Ok(Rc::new(Node::Stem {
                    stem: stem.clone(),
                    commitment: commitment.fork(),
                    values_commitment: values_commitment.fork(),
                    children: new_children,
                }))
            } else {
                // Case B: diverge. Interpose an Internal that places the
                // old stem (unchanged) on whichever side its own bit at
                // depth+1 indicates, and NullBranch on the other side,
                // then re-run the (now Internal) transition at the same
                // depth. If the new key's bit still agrees with the old
                // stem's bit, this repeats one level deeper; once they
                // disagree, the NullBranch side builds a fresh stem for
                // the new key. No slot content is ever re-encoded.
                let d1 = depth + 1;
                let old_bit = stem.get(d1)?;
                let synthetic = if old_bit {
                    Node::internal(CommitmentCell::fresh(), Node::null_branch(), Rc::clone(node))
                } else {
                    Node::internal(CommitmentCell::fresh(), Rc::clone(node), Node::null_branch())
                };
                insert_at(&synthetic, depth, path, value)
            }
        }

        Node::Leaf { .. } => {
            let _d = depth + 1;
            Ok(Node::leaf(value.to_vec()))
        }

        Node::NullBranch => {
            let stem = path.slice(0, STEM_BITS)?;
            // Re-enter at the same depth: the Stem arm above owns the
            // single depth increment for this level.
            insert_at(&Node::empty_stem(stem), depth, path, value)
        }

        Node::NullLeaf => {
            let _d = depth + 1;
            Ok(Node::leaf(value.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::lookup::get;

    fn key_bits(bytes: &[u8; 32]) -> BitSequence {
        BitSequence::from_bytes(bytes)
    }

    #[test]
    fn single_insert_is_retrievable() {
        let mut key = [0u8; 32];
        key.copy_from_slice(&[
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb,
            0xcc, 0xdd, 0xee, 0xff,
        ]);
        let value = vec![0x10u8; 1];
        let root = Node::null_branch();
        let root = put(&root, &key_bits(&key), &value).unwrap();
        assert_eq!(get(&root, &key_bits(&key)).unwrap(), Some(value));

        let mut flipped = key;
        flipped[31] ^= 0x01; // flip the key's LSB
        assert_eq!(get(&root, &key_bits(&flipped)).unwrap(), None);
    }

    #[test]
    fn two_keys_sharing_a_stem_become_sibling_leaves() {
        let mut k1 = [0u8; 32];
        k1[31] = 0xff;
        let mut k2 = [0u8; 32];
        k2[31] = 0x00;

        let root = Node::null_branch();
        let root = put(&root, &key_bits(&k1), &vec![1]).unwrap();
        let root = put(&root, &key_bits(&k2), &vec![2]).unwrap();

        assert_eq!(get(&root, &key_bits(&k1)).unwrap(), Some(vec![1]));
        assert_eq!(get(&root, &key_bits(&k2)).unwrap(), Some(vec![2]));
    }

    #[test]
    fn overwrite_replaces_the_value() {
        let key = [0x42u8; 32];
        let root = Node::null_branch();
        let root = put(&root, &key_bits(&key), &vec![1]).unwrap();
        let root = put(&root, &key_bits(&key), &vec![2]).unwrap();
        assert_eq!(get(&root, &key_bits(&key)).unwrap(), Some(vec![2]));
    }

    #[test]
    fn put_rejects_wrong_length_keys() {
        let root = Node::null_branch();
        let short = BitSequence::from_bytes(&[0u8; 31]);
        assert_eq!(put(&root, &short, &[1]).unwrap_err(), TrieError::InvalidInput);
    }
}
