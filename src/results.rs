//! Ordered result collection and tally derivation.
//!
//! A [`ResultSet`] is an append-only sequence of entries spanning one or
//! more scopes. It is owned by the test case that produced it and handed to
//! the run-level accumulation step afterwards. Counts are never stored
//! alongside the data; a [`Tally`] is always derived by scanning, so the
//! two can never drift apart.

use serde::{Deserialize, Serialize};

use crate::outcome::Entry;

/// An ordered, append-only sequence of recorded entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: Vec<Entry>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Concatenates another result set onto this one, preserving the
    /// original order of both.
    pub fn append(&mut self, other: ResultSet) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classifies every entry in a single pass. A fault always counts as an
    /// error, whether it came from suppression or a caught panic; hiding
    /// suppressed lines is a presentation choice and never changes counts.
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for entry in &self.entries {
            match entry {
                Entry::Outcome(o) if o.passed => tally.passed += 1,
                Entry::Outcome(_) => tally.failed += 1,
                Entry::Fault(_) => tally.errors += 1,
            }
        }
        tally
    }
}

impl std::ops::Deref for ResultSet {
    type Target = [Entry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Entry> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Aggregate counts derived from a [`ResultSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors
    }

    /// True when nothing failed and nothing erred.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}
