//! Read-only snapshots of the rack for display layers.

use arrayvec::ArrayVec;

use piece_rack_types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Copy of the rack contents at one observation point.
///
/// Orderings match what frontends print: `upcoming` front to back,
/// `reserved` top to base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RackSnapshot<const N: usize = QUEUE_CAPACITY, const C: usize = RESERVE_CAPACITY> {
    pub upcoming: ArrayVec<Piece, N>,
    pub reserved: ArrayVec<Piece, C>,
}

impl<const N: usize, const C: usize> RackSnapshot<N, C> {
    pub fn clear(&mut self) {
        self.upcoming.clear();
        self.reserved.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.reserved.is_empty()
    }
}

impl<const N: usize, const C: usize> Default for RackSnapshot<N, C> {
    fn default() -> Self {
        Self {
            upcoming: ArrayVec::new(),
            reserved: ArrayVec::new(),
        }
    }
}
