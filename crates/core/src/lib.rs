//! Core rack logic - pure, deterministic, and testable
//!
//! This crate contains the containers, the piece generator, and the transfer
//! coordinator. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: a seeded or scripted kind source reproduces a run
//! - **Testable**: every operation is exercisable without a terminal
//! - **Portable**: usable from any frontend (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO of upcoming pieces
//! - [`stack`]: fixed-capacity LIFO of reserved pieces
//! - [`rng`]: kind selection capability and unique id assignment
//! - [`rack`]: the transfer coordinator over the (queue, stack) pair
//! - [`snapshot`]: read-only copies of the rack for display layers
//!
//! # Rack Rules
//!
//! - **Play** consumes the queue front; the queue is topped back up
//! - **Reserve** moves the queue front onto the reserve stack, then tops up
//! - **Use reserved** pops the stack; the queue is topped up if short
//! - **Swaps** exchange pieces between the containers in place - nothing
//!   leaves the rack and nothing is generated
//! - Every operation is atomic over the pair: full effect or no change
//!
//! # Example
//!
//! ```
//! use piece_rack_core::StandardRack;
//!
//! let mut rack = StandardRack::seeded(12345);
//! assert_eq!(rack.upcoming_len(), 5);
//!
//! let played = rack.play().unwrap();
//! assert_eq!(played.id, 0);
//! // The queue was topped back up with a fresh piece.
//! assert_eq!(rack.upcoming_len(), 5);
//! ```

pub mod queue;
pub mod rack;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use piece_rack_types as types;

// Re-export commonly used types for convenience
pub use queue::{BoundedQueue, QueueEmpty, QueueFull};
pub use rack::{PieceRack, RackError, StandardRack};
pub use rng::{KindSource, PieceFactory, RandomKinds, SequenceKinds, SimpleRng};
pub use snapshot::RackSnapshot;
pub use stack::{BoundedStack, StackEmpty, StackFull};
