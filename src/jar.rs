use std::collections::TryReserveError;
use std::ops::ControlFlow;
use std::slice;
use std::vec;

use tracing::{debug, warn};

use crate::config::ParseOptions;
use crate::dispatch::try_parse;
use crate::pair::Pair;
use crate::parser::Error;

/// Capacity of a [Jar] created by [Jar::new], and the capacity a jar
/// with no capacity grows to on its first insertion.
pub const DEFAULT_CAPACITY: usize = 8;

/// Entry is an owned cookie key and value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    pub fn new(key: String, value: String) -> Entry {
        Entry { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

/// Jar holds owned copies of every pair of one or more cookie headers,
/// in the order they were parsed.  Duplicate keys are kept.
///
/// Storage grows by doubling.  [Jar::capacity] reports the number of
/// entries the jar holds before its next growth.
///
/// ```
/// use cookieparse::Jar;
///
/// let mut jar = Jar::with_capacity(2);
/// jar.load("a=1; b=2; c=3").unwrap();
///
/// assert_eq!(jar.len(), 3);
/// assert_eq!(jar.capacity(), 4);
/// assert_eq!(jar.get("B"), Some("2"));
///
/// jar.clear();
/// assert_eq!(jar.len(), 0);
/// assert_eq!(jar.capacity(), 0);
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Entry>"))]
pub struct Jar {
    entries: Vec<Entry>,
    capacity: usize,
}

/// Parses `text` into a new [Jar] of [DEFAULT_CAPACITY].
///
/// ```
/// let jar = cookieparse::materialize("a=1; b=2; c=3").unwrap();
/// let pairs: Vec<_> = jar.iter().map(|e| (e.key(), e.value())).collect();
///
/// assert_eq!(pairs, [("a", "1"), ("b", "2"), ("c", "3")]);
/// ```
pub fn materialize(text: &str) -> Result<Jar, Error> {
    Jar::parse(text)
}

impl Jar {
    pub fn new() -> Jar {
        Jar::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty Jar with room for `capacity` entries.  A zero
    /// capacity allocates nothing until the first insertion.
    pub fn with_capacity(capacity: usize) -> Jar {
        Jar {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn parse(text: &str) -> Result<Jar, Error> {
        let mut jar = Jar::new();
        jar.load(text)?;
        Ok(jar)
    }

    /// Appends every pair of `text`.  On failure the entries appended
    /// before it stay in the jar.
    pub fn load(&mut self, text: &str) -> Result<(), Error> {
        self.load_with(text, &ParseOptions::default())
    }

    pub fn load_with(&mut self, text: &str, options: &ParseOptions) -> Result<(), Error> {
        let r = try_parse(text, options, |pair| match self.push(pair) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => ControlFlow::Break(err),
        })?;

        match r {
            ControlFlow::Break(err) => Err(err),
            ControlFlow::Continue(()) => Ok(()),
        }
    }

    /// Appends a copy of `pair`.
    pub fn push(&mut self, pair: Pair<'_>) -> Result<(), Error> {
        if self.entries.len() == self.capacity {
            self.grow()?;
        }

        let entry = pair.try_to_entry().map_err(|err| {
            warn!(
                key_len = pair.key().len(),
                value_len = pair.value().len(),
                "cookie copy failed: {err}"
            );
            err
        })?;

        self.entries.push(entry);

        Ok(())
    }

    fn grow(&mut self) -> Result<(), Error> {
        let capacity = match self.capacity {
            0 => DEFAULT_CAPACITY,
            n => n.saturating_mul(2),
        };

        let additional = capacity - self.entries.len();

        reserve(&mut self.entries, additional).map_err(|err| {
            warn!(capacity, "cookie jar growth failed: {err}");
            err
        })?;

        debug!(from = self.capacity, to = capacity, "cookie jar grown");

        self.capacity = capacity;

        Ok(())
    }

    /// Drops every entry and releases the storage.  Length and
    /// capacity become 0.  Clearing an empty jar does nothing else.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
        self.capacity = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns the value of the first entry whose key equals `key`,
    /// ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key.eq_ignore_ascii_case(key))
            .map(Entry::value)
    }

    /// Returns the values of every entry whose key equals `key`,
    /// ignoring ASCII case, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.key.eq_ignore_ascii_case(key))
            .map(Entry::value)
    }
}

#[cfg(test)]
thread_local! {
    static RESERVE_LIMIT: std::cell::Cell<usize> = const { std::cell::Cell::new(usize::MAX) };
}

#[cfg(test)]
fn over_limit(capacity: usize) -> bool {
    RESERVE_LIMIT.with(|limit| capacity > limit.get())
}

#[cfg(not(test))]
fn over_limit(_capacity: usize) -> bool {
    false
}

fn reserve(entries: &mut Vec<Entry>, additional: usize) -> Result<(), TryReserveError> {
    if over_limit(entries.len().saturating_add(additional)) {
        // Overflows the capacity computation, so nothing is allocated.
        return entries.try_reserve_exact(usize::MAX);
    }

    entries.try_reserve_exact(additional)
}

/// The copy keeps the logical capacity and reserves storage for it.
impl Clone for Jar {
    fn clone(&self) -> Jar {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend_from_slice(&self.entries);

        Jar {
            entries,
            capacity: self.capacity,
        }
    }
}

/// Jars are equal when they hold the same entries in the same order.
/// Capacity is not compared.
impl PartialEq for Jar {
    fn eq(&self, other: &Jar) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Jar {}

impl Default for Jar {
    fn default() -> Jar {
        Jar::new()
    }
}

impl TryFrom<Vec<Entry>> for Jar {
    type Error = Error;

    /// The capacity is the one reached by inserting the entries one by
    /// one into a [Jar::new].
    fn try_from(mut entries: Vec<Entry>) -> Result<Jar, Error> {
        let mut capacity = DEFAULT_CAPACITY;
        while capacity < entries.len() {
            capacity = capacity.saturating_mul(2);
        }

        let additional = capacity - entries.len();
        reserve(&mut entries, additional)?;

        Ok(Jar { entries, capacity })
    }
}

impl<'a> IntoIterator for &'a Jar {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> slice::Iter<'a, Entry> {
        self.entries.iter()
    }
}

impl IntoIterator for Jar {
    type Item = Entry;
    type IntoIter = vec::IntoIter<Entry>;

    fn into_iter(self) -> vec::IntoIter<Entry> {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Jar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
