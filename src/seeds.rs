// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Hash seed generation.
//!
//! Each filter owns its own generator, so two filters built from the same
//! [`SeedSource::Fixed`] value always agree on their seeds.
use std::ops::Deref;

/// Smallest seed value that can be drawn.
pub const SEED_MIN: u64 = 1024;
/// Largest seed value that can be drawn.
pub const SEED_MAX: u64 = 1024 * 1024;

/// Where the seed generator gets its initial state from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Reproducible seeds derived from the given value.
    Fixed(u64),
    /// Seeds derived from process entropy.
    Random,
}

impl SeedSource {
    fn rng(self) -> fastrand::Rng {
        match self {
            Self::Fixed(seed) => fastrand::Rng::with_seed(seed),
            Self::Random => fastrand::Rng::new(),
        }
    }
}

/// The `k` seeds parameterizing the filter's hash functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashSeeds(Box<[u64]>);

impl HashSeeds {
    /// Draw `k` seeds in `[SEED_MIN, SEED_MAX]`.
    pub fn generate(k: usize, source: SeedSource) -> Self {
        let rng = source.rng();
        Self((0..k).map(|_| rng.u64(SEED_MIN..=SEED_MAX)).collect())
    }

    /// Return the seeds in the order they are consulted.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl Deref for HashSeeds {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}
