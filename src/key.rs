// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Canonical item representation.
use std::fmt::Display;

/// Types that can be stored in a [`crate::BloomFilter`].
///
/// An item is hashed through its canonical string, so values that render
/// identically are treated as the same item: `'a'`, `"a"` and
/// `String::from("a")` all map to the same bits.
pub trait Canonical {
    /// Return the string that gets hashed for this item.
    fn canonical(&self) -> String;
}

impl<T: Display + ?Sized> Canonical for T {
    fn canonical(&self) -> String {
        self.to_string()
    }
}
