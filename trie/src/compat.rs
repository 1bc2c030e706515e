//! Compatibility shim — simply re-exports from std.
//! In the future, when no_std is activated via a feature flag for WASM
//! embedding, this module will conditionally re-export from `alloc` instead.
pub use std::rc::Rc;
pub use std::vec;
pub use std::vec::Vec;
