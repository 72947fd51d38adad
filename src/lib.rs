//! Piece rack (workspace facade crate).
//!
//! This package keeps the `piece_rack::{core,term,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use piece_rack_core as core;
pub use piece_rack_term as term;
pub use piece_rack_types as types;
