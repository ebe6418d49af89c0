//! Bag randomizer - 7-bag piece supply
//!
//! Each bag holds every shape exactly once in a shuffled order. Shapes are
//! handed out one at a time; the moment a bag is used up a fresh permutation
//! is drawn, so the cursor always points at the next shape to come out and
//! [`Bag::peek`] never needs to look ahead into an unshuffled bag.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Shape, BAG_SIZE};

#[derive(Debug, Clone)]
pub struct Bag<R = StdRng> {
    shapes: [Shape; BAG_SIZE],
    /// Always in `0..BAG_SIZE`.
    cursor: usize,
    rng: R,
}

impl Bag<StdRng> {
    /// Deterministic bag sequence for a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Bag seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Bag<R> {
    pub fn new(rng: R) -> Self {
        let mut bag = Self {
            shapes: Shape::ALL,
            cursor: 0,
            rng,
        };
        bag.refill();
        bag
    }

    /// Draw a fresh uniformly random permutation (Fisher-Yates) and rewind.
    fn refill(&mut self) {
        self.shapes = Shape::ALL;
        for i in (1..BAG_SIZE).rev() {
            let j = self.rng.gen_range(0..=i);
            self.shapes.swap(i, j);
        }
        self.cursor = 0;
    }

    /// The shape the next [`Bag::draw`] returns.
    pub fn peek(&self) -> Shape {
        self.shapes[self.cursor]
    }

    /// Take the shape at the cursor, refilling once the bag is exhausted.
    pub fn draw(&mut self) -> Shape {
        let shape = self.shapes[self.cursor];
        self.cursor += 1;
        if self.cursor == BAG_SIZE {
            self.refill();
        }
        shape
    }

    /// Shapes left in the current bag, next one first.
    pub fn remaining(&self) -> &[Shape] {
        &self.shapes[self.cursor..]
    }
}
