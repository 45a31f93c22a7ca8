//! Formatting modes and the readings resolver boundary.
//!
//! A resolver turns one character into its candidate pinyin readings for a
//! given output format. The bundled [`PinyinResolver`] is backed by the
//! `pinyin` crate's dictionary; any backend honoring the same contract is
//! substitutable.

use pinyin::ToPinyinMulti;

use crate::error::Result;

/// A single romanization as produced by a resolver. Opaque to the rest of
/// the pipeline, never parsed further.
pub type Reading = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
}

/// Whether the tone is carried as a diacritic or stripped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneSpelling {
    Marked,
    Plain,
}

/// How the vowel "ü" is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YuSpelling {
    Umlaut,
    UWithColon,
}

/// An immutable description of how readings are rendered. The two formats
/// used by the generator are fixed at process start and passed explicitly
/// into the resolver, so there is no global format state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    case: LetterCase,
    tone: ToneSpelling,
    yu: YuSpelling,
}

impl OutputFormat {
    pub fn new(case: LetterCase, tone: ToneSpelling, yu: YuSpelling) -> Self {
        Self { case, tone, yu }
    }
    /// Lowercase, tone diacritics kept, "ü" spelled "u:".
    pub fn toned() -> Self {
        Self::new(LetterCase::Lower, ToneSpelling::Marked, YuSpelling::UWithColon)
    }
    /// Lowercase, tone stripped, "ü" spelled "u:".
    pub fn toneless() -> Self {
        Self::new(LetterCase::Lower, ToneSpelling::Plain, YuSpelling::UWithColon)
    }
    pub fn case(&self) -> LetterCase {
        self.case
    }
    pub fn tone(&self) -> ToneSpelling {
        self.tone
    }
    pub fn yu(&self) -> YuSpelling {
        self.yu
    }
}

/// The lookup boundary between the generator and a phonetic dictionary.
///
/// An empty result means "no reading for this character in this format"
/// and is a valid outcome, distinct from `Err`, which signals that the
/// lookup itself failed for the character. Reading order is decided by the
/// backend and must be passed through unchanged.
pub trait ReadingsResolver {
    fn resolve(&self, character: char, format: &OutputFormat) -> Result<Vec<Reading>>;
}

/// Resolver backed by the `pinyin` crate's bundled dictionary. A
/// polyphonic character yields one reading per pronunciation, in
/// dictionary order.
#[derive(Debug, Default)]
pub struct PinyinResolver;

impl PinyinResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ReadingsResolver for PinyinResolver {
    fn resolve(&self, character: char, format: &OutputFormat) -> Result<Vec<Reading>> {
        let Some(pronunciations) = character.to_pinyin_multi() else {
            // Not in the dictionary: punctuation, unassigned slots, non-Han input.
            return Ok(Vec::new());
        };
        let mut readings = Vec::with_capacity(pronunciations.count());
        for pinyin in pronunciations {
            let raw = match format.tone() {
                ToneSpelling::Marked => pinyin.with_tone(),
                ToneSpelling::Plain => pinyin.plain(),
            };
            readings.push(render(raw, format));
        }
        Ok(readings)
    }
}

// The dictionary spells "ü" with the umlaut; rewrite it to the
// two-character "u:" form when the format asks for it. The toned variants
// keep their mark on the u.
fn render(raw: &str, format: &OutputFormat) -> Reading {
    let mut rendered = String::with_capacity(raw.len() + 1);
    for c in raw.chars() {
        match (format.yu(), c) {
            (YuSpelling::UWithColon, 'ü') => rendered.push_str("u:"),
            (YuSpelling::UWithColon, 'ǖ') => rendered.push_str("ū:"),
            (YuSpelling::UWithColon, 'ǘ') => rendered.push_str("ú:"),
            (YuSpelling::UWithColon, 'ǚ') => rendered.push_str("ǔ:"),
            (YuSpelling::UWithColon, 'ǜ') => rendered.push_str("ù:"),
            _ => rendered.push(c),
        }
    }
    match format.case() {
        LetterCase::Lower => rendered, // the dictionary is already lowercase
        LetterCase::Upper => rendered.to_uppercase(),
    }
}
