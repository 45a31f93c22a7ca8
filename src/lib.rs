//! Pinbase – generates a static pinyin lookup database for the CJK
//! Unified Ideographs block (U+4E00–U+9FFF).
//!
//! The pipeline is a one-shot sequential scan, data flowing one way:
//! code point → character → per-format raw readings → deduplicated
//! readings → character record → insertion-ordered database → JSON
//! artifact. A character enters the database only when it has at least
//! one reading in both formats; a single character's failed lookup is
//! logged and skipped, never aborting the pass.
//!
//! ## Modules
//! * [`resolve`] – Formatting-mode value objects and the
//!   [`resolve::ReadingsResolver`] boundary, with the dictionary-backed
//!   [`resolve::PinyinResolver`].
//! * [`record`] – Per-character deduplication and the
//!   [`record::RecordBuilder`] qualification rule.
//! * [`assemble`] – The [`assemble::Assembler`] range driver, the
//!   insertion-ordered [`assemble::PinyinDatabase`] and run statistics.
//! * [`persist`] – The [`persist::Persistor`] JSON artifact writer with
//!   atomic finalize.
//! * [`settings`] – Defaults plus config-file and environment overrides.
//! * [`error`] – The crate-wide error enum and `Result` alias.
//!
//! ## Quick Start
//! ```no_run
//! use pinbase::assemble::Assembler;
//! use pinbase::persist::Persistor;
//! use pinbase::resolve::PinyinResolver;
//! let assembler = Assembler::new(PinyinResolver::new());
//! let (database, statistics) = assembler.assemble();
//! assert_eq!(database.len() as u32, statistics.recorded);
//! Persistor::new("pinyin_database.json").persist(&database).unwrap();
//! ```

pub mod assemble;
pub mod error;
pub mod persist;
pub mod record;
pub mod resolve;
pub mod settings;
