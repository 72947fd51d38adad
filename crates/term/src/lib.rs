//! Terminal presentation for the piece rack.
//!
//! Two layers, mirroring the core/presentation split:
//! - [`rack_view`] turns a snapshot into plain text lines (pure, testable)
//! - [`renderer`] flushes those lines to a terminal, coloring piece tokens
//!   by kind when stdout is a terminal
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all I/O and styling at this edge

pub mod rack_view;
pub mod renderer;

pub use piece_rack_core as core;
pub use piece_rack_types as types;

pub use rack_view::RackView;
pub use renderer::{piece_color, Console};
