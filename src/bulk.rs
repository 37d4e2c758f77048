// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Feeding comma-delimited text into a filter.
//!
//! Each input line is split on `,` and every token is added to, or checked
//! against, a [`BloomFilter`]. Tokens are used verbatim; only the line
//! terminator is removed.
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::bloom::BloomFilter;
use crate::error::Result;

/// Token delimiter within a line.
pub const DELIMITER: char = ',';

/// Result of checking a single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    /// The item is possibly in the filter.
    Present,
    /// The item is definitely not in the filter.
    Absent,
}

impl From<bool> for Membership {
    fn from(contained: bool) -> Self {
        if contained {
            Self::Present
        } else {
            Self::Absent
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// A checked token and its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    /// The token as it appeared in the input.
    pub item: String,
    /// Whether the filter reported it.
    pub membership: Membership,
}

/// Split a line into item tokens.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    line.split(DELIMITER)
}

/// Add every token of every line. Returns the added tokens, in input order.
pub fn add_lines<I, S>(filter: &mut BloomFilter<str>, lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut added = Vec::new();

    for line in lines {
        for item in tokens(line.as_ref()) {
            filter.add(item);
            added.push(item.to_owned());
        }
    }
    added
}

/// Check every token of every line. Returns one probe per token, in input order.
pub fn test_lines<I, S>(filter: &BloomFilter<str>, lines: I) -> Vec<Probe>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut probes = Vec::new();

    for line in lines {
        for item in tokens(line.as_ref()) {
            let membership = Membership::from(filter.contains(item));

            tracing::debug!(item, result = %membership, "Tested item");
            probes.push(Probe {
                item: item.to_owned(),
                membership,
            });
        }
    }
    probes
}

/// Read all lines from a reader.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<_>>()?)
}

/// Read all lines of a file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;

    read_lines(BufReader::new(file))
}

/// Add every token of a comma-delimited text file.
pub fn add_from_file<P: AsRef<Path>>(filter: &mut BloomFilter<str>, path: P) -> Result<Vec<String>> {
    let lines = read_file(path)?;

    Ok(add_lines(filter, lines))
}

/// Check every token of a comma-delimited text file.
pub fn test_from_file<P: AsRef<Path>>(filter: &BloomFilter<str>, path: P) -> Result<Vec<Probe>> {
    let lines = read_file(path)?;

    Ok(test_lines(filter, lines))
}
