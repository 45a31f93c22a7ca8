//! Exercises the real dictionary-backed resolver end to end on small
//! slices of the CJK block.

use pinbase::assemble::Assembler;
use pinbase::resolve::{OutputFormat, PinyinResolver, ReadingsResolver};

#[test]
fn zhong_resolves_in_both_formats() {
    let assembler = Assembler::new(PinyinResolver::new());
    let (database, statistics) = assembler.assemble_range('中' as u32, '中' as u32, 0, |_| {});

    assert_eq!(statistics.recorded, 1);
    let record = database.get('中').expect("中 is in the dictionary");
    assert!(record.with_tone.iter().any(|r| r == "zhōng"), "{:?}", record.with_tone);
    assert!(record.without_tone.iter().any(|r| r == "zhong"), "{:?}", record.without_tone);
}

#[test]
fn polyphonic_character_keeps_all_pronunciations() {
    let assembler = Assembler::new(PinyinResolver::new());
    let (database, _) = assembler.assemble_range('重' as u32, '重' as u32, 0, |_| {});

    let record = database.get('重').unwrap();
    assert!(record.with_tone.iter().any(|r| r == "zhòng"), "{:?}", record.with_tone);
    assert!(record.with_tone.iter().any(|r| r == "chóng"), "{:?}", record.with_tone);
    assert!(record.without_tone.iter().any(|r| r == "zhong"));
    assert!(record.without_tone.iter().any(|r| r == "chong"));
}

#[test]
fn yu_vowel_is_rendered_as_u_colon() {
    let resolver = PinyinResolver::new();
    let toneless = resolver.resolve('绿', &OutputFormat::toneless()).unwrap();
    assert!(toneless.iter().any(|r| r == "lu:"), "{toneless:?}");
    let toned = resolver.resolve('绿', &OutputFormat::toned()).unwrap();
    assert!(toned.iter().any(|r| r == "lù:"), "{toned:?}");
}

#[test]
fn non_han_input_yields_no_readings() {
    let resolver = PinyinResolver::new();
    assert!(resolver.resolve('★', &OutputFormat::toned()).unwrap().is_empty());
    assert!(resolver.resolve('a', &OutputFormat::toneless()).unwrap().is_empty());
}

#[test]
fn record_invariants_hold_across_a_real_slice() {
    let assembler = Assembler::new(PinyinResolver::new());
    let (database, statistics) = assembler.assemble_range(0x4E00, 0x4EFF, 0, |_| {});

    assert!(statistics.recorded > 0, "the slice contains common characters");
    assert_eq!(database.len() as u32, statistics.recorded);
    let mut previous = None;
    for (character, record) in database.iter() {
        assert!(!record.with_tone.is_empty());
        assert!(!record.without_tone.is_empty());
        for readings in [&record.with_tone, &record.without_tone] {
            let mut sorted = readings.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), readings.len(), "no duplicates for {character}");
        }
        if let Some(p) = previous {
            assert!(character > p, "entries ascend by code point");
        }
        previous = Some(character);
    }
}
