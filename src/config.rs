// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Filter construction parameters.
use crate::bloom::{optimal_bits, optimal_hashes};
use crate::error::{Error, Result};
use crate::seeds::SeedSource;

/// Default bit array length (`m`).
pub const DEFAULT_BITS: usize = 32 * 1000;
/// Default number of hash functions (`k`).
pub const DEFAULT_HASHES: usize = 10;
/// Default seed for reproducible filters.
pub const DEFAULT_SEED: u64 = 0;

/// Parameters a [`crate::BloomFilter`] is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Bit array length, `m`.
    pub bits: usize,
    /// Number of hash functions, `k`.
    pub hashes: usize,
    /// Where hash seeds are drawn from.
    pub seed: SeedSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bits: DEFAULT_BITS,
            hashes: DEFAULT_HASHES,
            seed: SeedSource::Fixed(DEFAULT_SEED),
        }
    }
}

impl Config {
    /// Configuration for an explicit `m` and `k`.
    pub fn new(bits: usize, hashes: usize) -> Self {
        Self {
            bits,
            hashes,
            ..Self::default()
        }
    }

    /// Size a filter for an approximate item capacity and a desired false positive rate.
    pub fn with_rate(capacity: usize, fp_rate: f64) -> Self {
        let bits = optimal_bits(capacity, fp_rate);
        let hashes = optimal_hashes(bits, capacity);

        Self::new(bits, hashes)
    }

    /// Use the given seed source.
    pub fn seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }

    /// Check that both `m` and `k` are at least one.
    pub fn validate(&self) -> Result<()> {
        if self.bits == 0 {
            return Err(Error::InvalidParameter {
                name: "bits",
                value: self.bits,
            });
        }
        if self.hashes == 0 {
            return Err(Error::InvalidParameter {
                name: "hashes",
                value: self.hashes,
            });
        }
        Ok(())
    }
}
