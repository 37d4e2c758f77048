// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Measuring a filter against exact set membership.
use std::collections::HashSet;
use std::fmt;

use crate::bloom::BloomFilter;
use crate::bulk::tokens;
use crate::config::Config;
use crate::error::Result;

/// Letters inserted by [`demo`].
pub const DEMO_MEMBERS: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "i", "j", "h", "k", "l", "m", "n", "p", "r", "o", "w",
    "q",
];

/// Words queried by [`demo`] that were never inserted.
pub const DEMO_OTHERS: &[&str] = &[
    "this", "is", "the", "worst", "thing", "happened", "to", "me", "Id", "like", "this", "to",
    "be", "over", "asap", "so", "I could", "play", "in my", "playstion",
];

/// The filter's answer for one query compared to the truth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Queried item.
    pub item: String,
    /// What the filter reported.
    pub reported: bool,
    /// Whether the item was actually inserted.
    pub expected: bool,
}

impl Outcome {
    /// Whether the filter agreed with the truth.
    pub fn is_success(&self) -> bool {
        self.reported == self.expected
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.is_success() {
            "Success!"
        } else {
            "FAILED!"
        };
        write!(f, "{} Item={}, Bloom says: {}", outcome, self.item, self.reported)
    }
}

/// All outcomes of an evaluation run, in query order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// One entry per query.
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Number of queries the filter answered correctly.
    pub fn score(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of queries.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Queries reported present that were never inserted.
    pub fn false_positives(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.reported && !o.expected)
            .count()
    }

    /// Queries reported absent that were inserted. Always zero.
    pub fn false_negatives(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.reported && o.expected)
            .count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}/{}", self.score(), self.total())
    }
}

/// Build a filter from `config`, add every token of `inputs`, then query every
/// token of `queries` and compare each answer with exact membership.
pub fn evaluate<I, Q, S, T>(config: &Config, inputs: I, queries: Q) -> Result<Report>
where
    I: IntoIterator<Item = S>,
    Q: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut filter = BloomFilter::<str>::from_config(config)?;
    let mut members = HashSet::new();

    for line in inputs {
        for item in tokens(line.as_ref()) {
            filter.add(item);
            members.insert(item.to_owned());
        }
    }

    let mut report = Report::default();
    for line in queries {
        for item in tokens(line.as_ref()) {
            report.outcomes.push(Outcome {
                item: item.to_owned(),
                reported: filter.contains(item),
                expected: members.contains(item),
            });
        }
    }
    tracing::info!(
        members = members.len(),
        score = report.score(),
        total = report.total(),
        false_positives = report.false_positives(),
        "Evaluated Bloom filter"
    );

    Ok(report)
}

/// Insert [`DEMO_MEMBERS`], then query the members followed by [`DEMO_OTHERS`].
pub fn demo(config: &Config) -> Result<Report> {
    let queries = DEMO_MEMBERS.iter().chain(DEMO_OTHERS);

    evaluate(config, DEMO_MEMBERS, queries)
}
