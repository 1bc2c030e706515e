//! Path-guided transformers over the node algebra: plain recursive
//! functions matching on `Node`, rather than a visitor-class hierarchy.

pub mod insert;
pub mod lookup;
