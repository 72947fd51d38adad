//! Piece generation: kind selection and unique id assignment.
//!
//! Kind selection is a pluggable capability ([`KindSource`]) so tests and
//! replays can substitute a scripted sequence for the default seeded draw.
//! Id assignment lives in [`PieceFactory`], which owns the monotonic
//! counter; it is explicit state, never an ambient global.

use piece_rack_types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Capability that produces the kind of each freshly generated piece.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Draws kinds uniformly at random from [`PieceKind::ALL`].
#[derive(Debug, Clone)]
pub struct RandomKinds {
    rng: SimpleRng,
}

impl RandomKinds {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl KindSource for RandomKinds {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[index]
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted.
///
/// Deterministic stand-in for [`RandomKinds`] in tests and replays.
#[derive(Debug, Clone)]
pub struct SequenceKinds {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl SequenceKinds {
    /// Panics in debug builds if `kinds` is empty; an empty script has
    /// nothing to replay.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        debug_assert!(!kinds.is_empty(), "sequence must contain at least one kind");
        Self { kinds, cursor: 0 }
    }
}

impl KindSource for SequenceKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor += 1;
        kind
    }
}

/// Stamps each generated piece with the next unused id.
///
/// The counter only moves forward: exactly one increment per generated
/// piece, no reuse within a process run.
#[derive(Debug, Clone)]
pub struct PieceFactory<S> {
    source: S,
    next_id: u64,
}

impl<S: KindSource> PieceFactory<S> {
    pub fn new(source: S) -> Self {
        Self { source, next_id: 0 }
    }

    /// Generate the next piece: a kind from the source plus a fresh id.
    pub fn next_piece(&mut self) -> Piece {
        let kind = self.source.next_kind();
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }

    /// Id the next generated piece will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
