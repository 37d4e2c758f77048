// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types.
use thiserror::Error;

/// Errors returned by filter construction and the bulk helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// A construction parameter is out of range.
    #[error("invalid parameter `{name}`: {value} (must be at least 1)")]
    InvalidParameter {
        /// Parameter name, eg. `bits`.
        name: &'static str,
        /// Rejected value.
        value: usize,
    },
    /// A bulk input source could not be read.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
