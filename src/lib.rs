//! A fixed-size Bloom filter driven by `k` independently seeded hash functions.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! With `m` bits, `k` hash functions and `n` inserted items, the expected
//! false positive rate is (1 - e<sup>-kn/m</sup>)<sup>k</sup>.
//!
//! # Seeded Hashing
//!
//! Each of the `k` hash functions is 128-bit SipHash-1-3 keyed with its own
//! seed, drawn once from `[1024, 1024²]` when the filter is built:
//!
//! g<sub>i</sub>(x) = SipHash<sub>s<sub>i</sub></sub>(canonical(x)) mod m
//!
//! Items are hashed through their canonical string (see [`Canonical`]), so
//! any type implementing `Display` can be stored.
//!
//! # Example
//!
//! ```
//! use seedbloom::BloomFilter;
//!
//! let mut filter = BloomFilter::<str>::with_seed(100, 10, 0).unwrap();
//!
//! filter.add("a");
//! filter.add("b");
//!
//! assert!(filter.contains("a"));
//! assert!(filter.contains("b"));
//! filter.contains("z"); // false, most likely
//! ```
#![warn(missing_docs)]

pub mod bitvec;
pub mod bloom;
pub mod bulk;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod key;
pub mod seeds;

pub use bloom::BloomFilter;
pub use bulk::{Membership, Probe};
pub use config::Config;
pub use error::{Error, Result};
pub use key::Canonical;
pub use seeds::SeedSource;
