//! RNG module - injectable piece generation
//!
//! The session never reaches for a global random source. It draws kinds
//! from a [`PieceGenerator`] handed to it at construction, so tests can
//! script exact piece sequences.
//!
//! Provided generators:
//! - [`UniformPieces`]: independent uniform draw per piece (classic behavior)
//! - [`SevenBag`]: each run of seven pieces contains every kind once
//! - [`FixedSequence`]: cycles through a caller-supplied list

use crate::types::ShapeKind;

/// Source of upcoming piece kinds
pub trait PieceGenerator {
    fn next_kind(&mut self) -> ShapeKind;
}

impl<G: PieceGenerator + ?Sized> PieceGenerator for Box<G> {
    fn next_kind(&mut self) -> ShapeKind {
        (**self).next_kind()
    }
}

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Independent uniform choice among the seven kinds
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: SimpleRng,
}

impl UniformPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceGenerator for UniformPieces {
    fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    /// Current bag of pieces
    bag: [ShapeKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl SevenBag {
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: ShapeKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag[self.bag_index..]
    }
}

impl PieceGenerator for SevenBag {
    fn next_kind(&mut self) -> ShapeKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Scripted generator: yields `kinds` in order, then starts over
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<ShapeKind>,
    index: usize,
}

impl FixedSequence {
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "FixedSequence needs at least one kind");
        Self { kinds, index: 0 }
    }

    /// The same kind forever
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceGenerator for FixedSequence {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}
