use std::collections::TryReserveError;
use std::fmt;

use crate::jar::Entry;

pub type Range = std::ops::Range<usize>;

/// Pair is a single `key=value` cookie borrowed from the parsed
/// header.  key and value are the starting and ending positions in
/// the input string, already trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<'a> {
    source: &'a str,
    key: Range,
    value: Range,
}

impl<'a> Pair<'a> {
    pub(crate) fn new(source: &'a str, key: Range, value: Range) -> Pair<'a> {
        Pair { source, key, value }
    }

    pub fn key(&self) -> &'a str {
        &self.source[self.key.clone()]
    }

    pub fn value(&self) -> &'a str {
        &self.source[self.value.clone()]
    }

    /// Returns the position of the key in the input string.
    pub fn key_range(&self) -> Range {
        self.key.clone()
    }

    /// Returns the position of the value in the input string.
    pub fn value_range(&self) -> Range {
        self.value.clone()
    }

    /// Returns true if the key equals `name`, ignoring ASCII case.
    /// `name` must match the whole key, a prefix is not enough.
    pub fn key_eq_ignore_case(&self, name: &str) -> bool {
        self.key().eq_ignore_ascii_case(name)
    }

    /// Copies key and value into an owned [Entry].
    pub fn try_to_entry(&self) -> Result<Entry, TryReserveError> {
        Ok(Entry::new(copy_str(self.key())?, copy_str(self.value())?))
    }
}

impl fmt::Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key(), self.value())
    }
}

pub(crate) fn copy_str(s: &str) -> Result<String, TryReserveError> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())?;
    out.push_str(s);
    Ok(out)
}
