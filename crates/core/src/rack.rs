//! Transfer coordinator for the (queue, stack) pair.
//!
//! Every operation either applies its full effect or leaves both containers
//! untouched, and failures come back as a typed [`RackError`]. A concurrent
//! adaptation must wrap each operation in a single mutual-exclusion scope
//! covering the whole pair, so observers never see a piece that has left
//! one container but not yet arrived in the other.

use std::mem;

use thiserror::Error;

use piece_rack_types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

use crate::queue::BoundedQueue;
use crate::rng::{KindSource, PieceFactory, RandomKinds};
use crate::snapshot::RackSnapshot;
use crate::stack::BoundedStack;

/// Operation-level failure reasons.
///
/// The `Display` strings are the user-facing messages printed verbatim by
/// frontends.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RackError {
    #[error("no piece to play")]
    NothingToPlay,
    #[error("nothing to reserve")]
    NothingToReserve,
    #[error("reserve full")]
    ReserveFull,
    #[error("reserve empty")]
    ReserveEmpty,
    #[error("insufficient pieces")]
    InsufficientPieces,
}

/// The rack: an upcoming-piece queue, a reserve stack, and the factory that
/// tops the queue up whenever a piece leaves it for good.
#[derive(Debug, Clone)]
pub struct PieceRack<S, const N: usize, const C: usize> {
    upcoming: BoundedQueue<Piece, N>,
    reserved: BoundedStack<Piece, C>,
    factory: PieceFactory<S>,
}

/// Rack with the standard deployment dimensions.
pub type StandardRack = PieceRack<RandomKinds, QUEUE_CAPACITY, RESERVE_CAPACITY>;

impl StandardRack {
    /// Standard rack with a seeded random kind source, queue filled to
    /// capacity (consuming ids `0..QUEUE_CAPACITY`).
    pub fn seeded(seed: u32) -> Self {
        Self::filled(PieceFactory::new(RandomKinds::new(seed)))
    }
}

impl<S: KindSource, const N: usize, const C: usize> PieceRack<S, N, C> {
    /// Rack with both containers empty. The queue stays empty until
    /// [`top_up`](Self::top_up) runs.
    pub fn new(factory: PieceFactory<S>) -> Self {
        Self {
            upcoming: BoundedQueue::new(),
            reserved: BoundedStack::new(),
            factory,
        }
    }

    /// Rack with the upcoming queue filled to capacity.
    pub fn filled(factory: PieceFactory<S>) -> Self {
        let mut rack = Self::new(factory);
        rack.top_up();
        rack
    }

    pub fn upcoming_len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn reserved_len(&self) -> usize {
        self.reserved.len()
    }

    /// Upcoming pieces, front to back.
    pub fn upcoming(&self) -> impl Iterator<Item = &Piece> {
        self.upcoming.iter()
    }

    /// Reserved pieces, top to base.
    pub fn reserved(&self) -> impl Iterator<Item = &Piece> {
        self.reserved.iter()
    }

    pub fn peek_upcoming(&self) -> Option<&Piece> {
        self.upcoming.peek_front()
    }

    pub fn peek_reserved(&self) -> Option<&Piece> {
        self.reserved.peek_top()
    }

    /// Id the factory will stamp on the next generated piece.
    pub fn next_id(&self) -> u64 {
        self.factory.next_id()
    }

    /// Generate fresh pieces until the upcoming queue is full.
    ///
    /// Returns how many pieces were added. Called automatically after every
    /// permanent removal; also performs the initial fill.
    pub fn top_up(&mut self) -> usize {
        let mut added = 0;
        while !self.upcoming.is_full() {
            let piece = self.factory.next_piece();
            if self.upcoming.enqueue(piece).is_err() {
                break;
            }
            added += 1;
        }
        added
    }

    /// Remove and return the front piece; it leaves the rack for good.
    pub fn play(&mut self) -> Result<Piece, RackError> {
        let piece = self
            .upcoming
            .dequeue()
            .map_err(|_| RackError::NothingToPlay)?;
        self.top_up();
        Ok(piece)
    }

    /// Move the front piece onto the reserve stack, then top up the queue.
    ///
    /// Both preconditions are checked before any mutation, so a failure
    /// leaves the pair exactly as it was.
    pub fn reserve(&mut self) -> Result<Piece, RackError> {
        if self.reserved.is_full() {
            return Err(RackError::ReserveFull);
        }
        let piece = self
            .upcoming
            .dequeue()
            .map_err(|_| RackError::NothingToReserve)?;
        if self.reserved.push(piece).is_err() {
            // Unreachable single-threaded: capacity was checked above and
            // the dequeue just freed a queue slot, so the restore cannot
            // fail either. A concurrent port that locks per-container
            // instead of per-operation lands here; restoring the front
            // keeps the pair consistent before the failure is reported.
            let _ = self.upcoming.push_front(piece);
            return Err(RackError::ReserveFull);
        }
        self.top_up();
        Ok(piece)
    }

    /// Pop the reserve stack; the piece leaves the rack for good.
    pub fn use_reserved(&mut self) -> Result<Piece, RackError> {
        let piece = self.reserved.pop().map_err(|_| RackError::ReserveEmpty)?;
        self.top_up();
        Ok(piece)
    }

    /// Exchange the queue front with the reserve top in place.
    ///
    /// No piece leaves the rack and no piece is generated.
    pub fn swap_front(&mut self) -> Result<(), RackError> {
        self.swap_many(1)
    }

    /// Exchange the first `k` queue slots with the top `k` reserve slots,
    /// pairwise: queue position `i` with reserve depth `i`.
    ///
    /// No piece leaves the rack and no piece is generated.
    pub fn swap_many(&mut self, k: usize) -> Result<(), RackError> {
        if self.upcoming.len() < k || self.reserved.len() < k {
            return Err(RackError::InsufficientPieces);
        }
        for i in 0..k {
            // Both slots are occupied per the length check above.
            if let (Some(front_slot), Some(reserve_slot)) =
                (self.upcoming.get_mut(i), self.reserved.get_from_top_mut(i))
            {
                mem::swap(front_slot, reserve_slot);
            }
        }
        Ok(())
    }

    /// Read-only copy of both containers for display layers.
    pub fn snapshot(&self) -> RackSnapshot<N, C> {
        RackSnapshot {
            upcoming: self.upcoming.to_ordered(),
            reserved: self.reserved.to_ordered(),
        }
    }
}
