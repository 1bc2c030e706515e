//! Trie-wide constants.

/// Bit-width of a full key: a stem plus its suffix.
pub const KEY_BITS: usize = 256;

/// Bit-width of the stem that identifies an aggregation unit.
pub const STEM_BITS: usize = 248;

/// Bit-width of the suffix that indexes a slot within a stem.
pub const SUFFIX_BITS: usize = 8;

/// Number of child slots in a `Stem` node (`2^SUFFIX_BITS`).
pub const STEM_FANOUT: usize = 256;

/// The all-zero 32-byte commitment, used as the "not yet computed" sentinel.
pub const EMPTY_COMMITMENT: [u8; 32] = [0u8; 32];
