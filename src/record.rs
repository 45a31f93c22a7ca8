//! Per-character record building: deduplication of resolver output and the
//! qualification rule deciding whether a character enters the database.

use std::collections::HashSet;
use std::hash::BuildHasherDefault;

use seahash::SeaHasher;
use serde::Serialize;

use crate::error::Result;
use crate::resolve::{OutputFormat, Reading, ReadingsResolver};

type ReadingHasher = BuildHasherDefault<SeaHasher>;

/// A set that remembers the order in which members first appeared.
/// Duplicates are dropped on entry, iteration order is insertion order.
#[derive(Debug, Default)]
pub struct OrderedReadingSet {
    order: Vec<Reading>,
    seen: HashSet<Reading, ReadingHasher>,
}

impl OrderedReadingSet {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::default(),
        }
    }
    /// Keeps the reading unless an identical one was already kept.
    /// Returns whether the reading was new.
    pub fn keep(&mut self, reading: Reading) -> bool {
        if self.seen.contains(&reading) {
            return false;
        }
        self.seen.insert(reading.clone());
        self.order.push(reading);
        true
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
    pub fn into_readings(self) -> Vec<Reading> {
        self.order
    }
}

/// The unit of output: one qualifying character's readings in both
/// formats. Both lists are non-empty and free of duplicates, in
/// first-occurrence order as reported by the resolver. The field names
/// are the artifact's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterRecord {
    #[serde(rename = "withTone")]
    pub with_tone: Vec<Reading>,
    #[serde(rename = "withoutTone")]
    pub without_tone: Vec<Reading>,
}

/// Builds records by resolving one character in both formats.
pub struct RecordBuilder<R> {
    resolver: R,
    toned: OutputFormat,
    toneless: OutputFormat,
}

impl<R: ReadingsResolver> RecordBuilder<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            toned: OutputFormat::toned(),
            toneless: OutputFormat::toneless(),
        }
    }

    /// Resolves the character in one format and collapses exact
    /// duplicates, preserving first-occurrence order. A polyphonic lookup
    /// may legitimately report the same rendering twice; each distinct
    /// reading survives exactly once. An empty result is the valid
    /// "no reading in this format" outcome, not an error.
    pub fn dedupe(&self, character: char, format: &OutputFormat) -> Result<Vec<Reading>> {
        let mut unique = OrderedReadingSet::new();
        for reading in self.resolver.resolve(character, format)? {
            unique.keep(reading);
        }
        Ok(unique.into_readings())
    }

    /// Produces a record only when the character has readings in both
    /// formats. A character empty on either side is skipped entirely
    /// rather than recorded with one empty list, so the record invariant
    /// (two non-empty lists) always holds. A resolver failure is returned
    /// to the caller, which contains it at the scan level.
    pub fn build(&self, character: char) -> Result<Option<CharacterRecord>> {
        let with_tone = self.dedupe(character, &self.toned)?;
        let without_tone = self.dedupe(character, &self.toneless)?;
        if with_tone.is_empty() || without_tone.is_empty() {
            return Ok(None);
        }
        Ok(Some(CharacterRecord {
            with_tone,
            without_tone,
        }))
    }
}
