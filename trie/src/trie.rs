//! The public facade: a handle on an immutable root, offering
//! `get`/`put` over raw byte keys and values. Keys and values are opaque
//! bytes in and bytes out — this crate never interprets either, leaving
//! key derivation and commitment computation to the caller.

use crate::bits::BitSequence;
use crate::compat::{Rc, Vec};
use crate::consts::KEY_BITS;
use crate::node::Node;
use crate::ops::{insert, lookup};
use crate::TrieError;

/// A binary prefix trie keyed by fixed-width (`KEY_BITS`-bit) byte
/// strings. Cloning a `Trie` is `O(1)`: it shares the same `Rc` root as
/// the original.
#[derive(Clone)]
pub struct Trie {
    root: Rc<Node>,
}

impl Trie {
    /// An empty trie.
    pub fn new() -> Self {
        Self { root: Node::null_branch() }
    }

    /// `Some(value)` for the last value `put` under `key`, `None` if
    /// `key` was never inserted. `InvalidInput` if `key` isn't exactly
    /// `KEY_BITS / 8` bytes.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, TrieError> {
        let path = key_path(key)?;
        lookup::get(&self.root, &path)
    }

    /// Returns a new `Trie` with `key` mapped to `value`; `self` is left
    /// unmodified and still observes the prior mapping. `InvalidInput` if
    /// `key` isn't exactly `KEY_BITS / 8` bytes.
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<Self, TrieError> {
        let path = key_path(key)?;
        let root = insert::put(&self.root, &path, value)?;
        Ok(Self { root })
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

fn key_path(key: &[u8]) -> Result<BitSequence, TrieError> {
    if key.len() * 8 != KEY_BITS {
        return Err(TrieError::InvalidInput);
    }
    Ok(BitSequence::from_bytes(key))
}
