//! The node algebra: a five-variant sum type, dispatched on with ordinary
//! `match` in `ops::insert`/`ops::lookup` rather than a visitor-class
//! hierarchy.
//!
//! Nodes carry no `location` field. Location is advisory tooling metadata
//! equal to the path already walked to reach a node; a caller that wants
//! it (a DOT exporter, say) already has it for free from its own
//! traversal and does not need the trie to carry or propagate it.

mod commitment;

pub use commitment::CommitmentCell;

use crate::bits::BitSequence;
use crate::compat::{Rc, Vec};
use crate::consts::{EMPTY_COMMITMENT, STEM_FANOUT};

/// A trie node. `Internal` and `Stem` own their children directly
/// (structural sharing happens at the `Rc` level — unchanged subtrees are
/// cloned as pointers by `put`, never copied).
pub enum Node {
    Internal { commitment: CommitmentCell, left: Rc<Node>, right: Rc<Node> },
    Stem {
        stem: BitSequence,
        commitment: CommitmentCell,
        values_commitment: CommitmentCell,
        children: Box<[Rc<Node>; STEM_FANOUT]>,
    },
    Leaf { value: Option<Vec<u8>> },
    NullBranch,
    NullLeaf,
}

impl Node {
    pub fn null_branch() -> Rc<Node> {
        Rc::new(Node::NullBranch)
    }

    pub fn null_leaf() -> Rc<Node> {
        Rc::new(Node::NullLeaf)
    }

    pub fn leaf(value: Vec<u8>) -> Rc<Node> {
        Rc::new(Node::Leaf { value: Some(value) })
    }

    pub fn internal(commitment: CommitmentCell, left: Rc<Node>, right: Rc<Node>) -> Rc<Node> {
        Rc::new(Node::Internal { commitment, left, right })
    }

    /// A fresh stem aggregate with all 256 slots `NullLeaf`.
    pub fn empty_stem(stem: BitSequence) -> Rc<Node> {
        Rc::new(Node::Stem {
            stem,
            commitment: CommitmentCell::fresh(),
            values_commitment: CommitmentCell::fresh(),
            children: Box::new(core::array::from_fn(|_| Node::null_leaf())),
        })
    }

    /// The cached commitment token. `EMPTY_COMMITMENT` for variants that
    /// don't carry one (`Leaf`, `NullBranch`, `NullLeaf`).
    pub fn commitment(&self) -> [u8; 32] {
        match self {
            Node::Internal { commitment, .. } => commitment.get(),
            Node::Stem { commitment, .. } => commitment.get(),
            Node::Leaf { .. } | Node::NullBranch | Node::NullLeaf => EMPTY_COMMITMENT,
        }
    }

    /// For `Stem` nodes, the commitment over the 256 leaf values. `None`
    /// for every other variant.
    pub fn values_commitment(&self) -> Option<[u8; 32]> {
        match self {
            Node::Stem { values_commitment, .. } => Some(values_commitment.get()),
            _ => None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self {
            Node::Internal { commitment, .. } => commitment.is_dirty(),
            Node::Stem { commitment, .. } => commitment.is_dirty(),
            Node::Leaf { .. } | Node::NullBranch | Node::NullLeaf => false,
        }
    }

    pub fn mark_dirty(&self) {
        match self {
            Node::Internal { commitment, .. } => commitment.mark_dirty(),
            Node::Stem { commitment, .. } => commitment.mark_dirty(),
            Node::Leaf { .. } | Node::NullBranch | Node::NullLeaf => {}
        }
    }

    /// Called by the commitment subsystem once it recomputes this node's
    /// digest. No-op on variants without a commitment slot.
    pub fn set_commitment(&self, value: [u8; 32]) {
        match self {
            Node::Internal { commitment, .. } => commitment.set(value),
            Node::Stem { commitment, .. } => commitment.set(value),
            Node::Leaf { .. } | Node::NullBranch | Node::NullLeaf => {}
        }
    }

    /// Called by the commitment subsystem once it recomputes a stem's
    /// values commitment. No-op on every other variant.
    pub fn set_values_commitment(&self, value: [u8; 32]) {
        if let Node::Stem { values_commitment, .. } = self {
            values_commitment.set(value);
        }
    }

    /// The serialized form handed to the commitment layer.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Node::Leaf { value } => value.clone().unwrap_or_default(),
            Node::Internal { commitment, .. } => commitment_bytes(commitment.get()),
            Node::Stem { stem, commitment, values_commitment, .. } => {
                let mut out = stem.encode();
                out.extend(commitment_bytes(commitment.get()));
                out.extend(commitment_bytes(values_commitment.get()));
                out
            }
            Node::NullBranch | Node::NullLeaf => Vec::new(),
        }
    }
}

fn commitment_bytes(c: [u8; 32]) -> Vec<u8> {
    if c == EMPTY_COMMITMENT {
        Vec::new()
    } else {
        c.to_vec()
    }
}
