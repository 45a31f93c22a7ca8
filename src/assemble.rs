//! The range driver: scans the CJK code-point block in ascending order,
//! builds one record per qualifying character and accumulates the
//! insertion-ordered database.

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use seahash::SeaHasher;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

use crate::record::{CharacterRecord, RecordBuilder};
use crate::resolve::ReadingsResolver;

/// First code point of the CJK Unified Ideographs block.
pub const FIRST_CODE_POINT: u32 = 0x4E00;
/// Last code point of the CJK Unified Ideographs block.
pub const LAST_CODE_POINT: u32 = 0x9FFF;
/// Default number of code points between progress reports.
pub const PROGRESS_INTERVAL: u32 = 1000;

type EntryHasher = BuildHasherDefault<SeaHasher>;

/// The character → record mapping. Entries are unique per character and
/// iterate in insertion order, which the assembler guarantees to be
/// ascending code-point order, all the way through serialization.
#[derive(Debug, Default)]
pub struct PinyinDatabase {
    order: Vec<char>,
    kept: HashMap<char, CharacterRecord, EntryHasher>,
}

impl PinyinDatabase {
    pub fn new() -> Self {
        Self::default()
    }
    /// Keeps the record under the character unless one is already kept.
    /// Returns whether the record was inserted.
    pub fn keep(&mut self, character: char, record: CharacterRecord) -> bool {
        if self.kept.contains_key(&character) {
            return false;
        }
        self.order.push(character);
        self.kept.insert(character, record);
        true
    }
    pub fn get(&self, character: char) -> Option<&CharacterRecord> {
        self.kept.get(&character)
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &CharacterRecord)> {
        self.order.iter().map(|c| (*c, &self.kept[c]))
    }
}

// Serialized as a JSON object keyed by the literal glyph, one entry per
// kept character, in insertion order.
impl Serialize for PinyinDatabase {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (character, record) in self.iter() {
            map.serialize_entry(&character, record)?;
        }
        map.end()
    }
}

/// Counters exposed after a full pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Code points visited, equal to the size of the scanned range.
    pub scanned: u32,
    /// Characters that produced a record.
    pub recorded: u32,
    /// Characters skipped because their lookup failed.
    pub failed: u32,
}

/// A snapshot handed to the progress hook.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub scanned: u32,
    pub total: u32,
    pub recorded: u32,
}

/// Drives the sequential scan. The database accumulator is owned here
/// exclusively; nothing else mutates it during the pass.
pub struct Assembler<R> {
    builder: RecordBuilder<R>,
}

impl<R: ReadingsResolver> Assembler<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            builder: RecordBuilder::new(resolver),
        }
    }

    /// Scans the full CJK Unified Ideographs block.
    pub fn assemble(&self) -> (PinyinDatabase, Statistics) {
        self.assemble_range(FIRST_CODE_POINT, LAST_CODE_POINT, PROGRESS_INTERVAL, |_| {})
    }

    /// Scans `[start, end]` inclusive in ascending order, visiting every
    /// code point exactly once. A failed lookup skips only that character
    /// and the scan always runs to completion. The progress hook fires
    /// every `interval` visited code points and has no effect on ordering
    /// or counting.
    pub fn assemble_range(
        &self,
        start: u32,
        end: u32,
        interval: u32,
        mut on_progress: impl FnMut(Progress),
    ) -> (PinyinDatabase, Statistics) {
        let mut database = PinyinDatabase::new();
        let mut statistics = Statistics::default();
        if start > end {
            return (database, statistics);
        }
        let total = end - start + 1;
        for code_point in start..=end {
            statistics.scanned += 1;
            // Only the surrogate gap fails here; an override placing the
            // range across it skips those code points.
            let Some(character) = char::from_u32(code_point) else {
                continue;
            };
            match self.builder.build(character) {
                Ok(Some(record)) => {
                    if database.keep(character, record) {
                        statistics.recorded += 1;
                    }
                }
                Ok(None) => {} // no pronunciation data in one of the formats
                Err(cause) => {
                    statistics.failed += 1;
                    warn!(%character, %cause, "lookup failed, character skipped");
                }
            }
            if interval > 0 && statistics.scanned % interval == 0 {
                on_progress(Progress {
                    scanned: statistics.scanned,
                    total,
                    recorded: statistics.recorded,
                });
            }
        }
        (database, statistics)
    }
}
