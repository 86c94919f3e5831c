//! Responder names and pairs.
//!
//! Names are compared as text after whitespace is collapsed. No further
//! identity resolution is attempted, so "J. Dupont" and "Jean Dupont" stay
//! two different responders.

use std::fmt;

use serde::{Serialize, Serializer};

/// Collapse runs of whitespace, returning `None` for a blank name
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Shorten a full name to `FirstName L.`
///
/// Single-word names are returned unchanged.
#[must_use]
pub fn short_name(name: &str) -> String {
    let mut parts = name.split_whitespace();
    let Some(first) = parts.next() else {
        return String::new();
    };
    match parts.next().and_then(|last| last.chars().next()) {
        Some(initial) => format!("{first} {}.", initial.to_uppercase()),
        None => first.to_string(),
    }
}

/// Unordered pair of responders, keyed on their short names
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Build the pair key for two responders in either role order
    ///
    /// Returns `None` when both names shorten to the same person.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Option<Self> {
        let a = short_name(a);
        let b = short_name(b);
        if a.is_empty() || b.is_empty() || a == b {
            return None;
        }
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Some(Self { first, second })
    }

    #[must_use]
    pub fn members(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}

impl Serialize for PairKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
