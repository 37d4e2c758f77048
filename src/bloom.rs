// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter using `k` independently seeded hash functions.

use std::f64;
use std::fmt;
use std::hash::Hasher;
use std::marker::PhantomData;

use siphasher::sip128::{Hasher128, SipHasher13};

use crate::bitvec::BitVec;
use crate::config::Config;
use crate::error::Result;
use crate::key::Canonical;
use crate::seeds::{HashSeeds, SeedSource};

/// `ln` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// A Bloom filter that keeps track of items of type `K`.
///
/// The bit array length (`m`) and the hash seeds (`k` of them) are fixed when
/// the filter is built; afterwards bits are only ever set, so an item that was
/// added is always reported as present.
pub struct BloomFilter<K: ?Sized = str> {
    bits: BitVec,
    seeds: HashSeeds,
    key: PhantomData<fn(&K)>,
}

impl<K: Canonical + ?Sized> BloomFilter<K> {
    /// Return a new filter of `m` bits and `k` hash functions, with seeds
    /// drawn from process entropy.
    pub fn new(m: usize, k: usize) -> Result<Self> {
        Self::from_config(&Config::new(m, k).seed(SeedSource::Random))
    }

    /// Return a new filter of `m` bits and `k` hash functions whose seeds are
    /// derived from `seed`. Filters built with the same arguments are identical.
    pub fn with_seed(m: usize, k: usize, seed: u64) -> Result<Self> {
        Self::from_config(&Config::new(m, k).seed(SeedSource::Fixed(seed)))
    }

    /// Return a new filter from a configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let filter = Self {
            bits: BitVec::new(config.bits),
            seeds: HashSeeds::generate(config.hashes, config.seed),
            key: PhantomData,
        };
        tracing::debug!(
            bits = config.bits,
            hashes = config.hashes,
            seed = ?config.seed,
            "Initialized Bloom filter"
        );

        Ok(filter)
    }

    /// Add an item to the filter. This operation is idempotent with regards
    /// to each unique item.
    pub fn add(&mut self, item: &K) {
        let key = item.canonical();

        for &seed in self.seeds.iter() {
            let index = self.index(&key, seed);
            self.bits.set(index);
        }
    }

    /// Return whether or not a given item is possibly in the filter. There is a
    /// possibility for a false positive, but a false negative will never occur.
    pub fn contains(&self, item: &K) -> bool {
        let key = item.canonical();

        self.seeds
            .iter()
            .all(|&seed| self.bits.is_set(self.index(&key, seed)))
    }

    /// Return the bit indexes an item maps to, one per seed, in seed order.
    pub fn indexes(&self, item: &K) -> Vec<usize> {
        let key = item.canonical();

        self.seeds.iter().map(|&seed| self.index(&key, seed)).collect()
    }

    fn index(&self, key: &str, seed: u64) -> usize {
        let mut sip = SipHasher13::new_with_keys(seed, 0);
        sip.write(key.as_bytes());

        let hash = sip.finish128();
        let hash = (u128::from(hash.h1) << 64) | u128::from(hash.h2);

        (hash % self.bits.len() as u128) as usize
    }
}

impl<K: ?Sized> BloomFilter<K> {
    /// Return the number of bits in this filter (`m` parameter).
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.seeds.len()
    }

    /// The hash seeds, in the order they are consulted.
    pub fn seeds(&self) -> &[u64] {
        self.seeds.as_slice()
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Count the approximate number of distinct items in the filter.
    pub fn count(&self) -> usize {
        let nbits = self.bits.len() as f64;
        let nbits_set = self.bits.count_ones() as f64;
        let nhashes = self.hashes() as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        count.round() as usize
    }

    /// Expected false positive rate after `n` distinct items have been added,
    /// ie. `(1 - e^(-kn/m))^k`.
    pub fn expected_false_positive_rate(&self, n: usize) -> f64 {
        let m = self.bits() as f64;
        let k = self.hashes() as f64;

        (1. - (-k * n as f64 / m).exp()).powf(k)
    }

    /// Return a copy of the bit array as little-endian bytes.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.bits.as_bytes()
    }
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// size and a desired false positive rate.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    (-((fp_rate.ln() * (capacity as f64)) / LN_SQR)).ceil() as usize
}

/// Return the optimal number of hash functions for a Bloom filter given a
/// bit vector size and an approximate set size. Never less than one.
///
/// Also called `k`.
pub fn optimal_hashes(nbits: usize, capacity: usize) -> usize {
    let ratio = nbits.checked_div(capacity).unwrap_or(0);

    ((ratio as f64) * f64::consts::LN_2).ceil().max(1.) as usize
}

impl<K: ?Sized> Clone for BloomFilter<K> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            seeds: self.seeds.clone(),
            key: PhantomData,
        }
    }
}

impl<K: ?Sized> fmt::Debug for BloomFilter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bits", &self.bits.len())
            .field("ones", &self.bits.count_ones())
            .field("seeds", &self.seeds.as_slice())
            .finish()
    }
}

impl<K: ?Sized> PartialEq for BloomFilter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.seeds == other.seeds
    }
}

impl<K: ?Sized> Eq for BloomFilter<K> {}
