//! Runtime configuration: compiled-in defaults, an optional `pinbase`
//! config file and `PINBASE_*` environment overrides.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::assemble::{FIRST_CODE_POINT, LAST_CODE_POINT, PROGRESS_INTERVAL};
use crate::error::{PinbaseError, Result};

pub const DEFAULT_OUTPUT: &str = "pinyin_database.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// First code point of the scan (inclusive).
    pub start: u32,
    /// Last code point of the scan (inclusive).
    pub end: u32,
    /// Where the artifact is written.
    pub output: PathBuf,
    /// Code points between progress reports.
    pub progress_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start: FIRST_CODE_POINT,
            end: LAST_CODE_POINT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

impl Settings {
    /// Layers the optional config file and environment on top of the
    /// defaults.
    pub fn load() -> Result<Self> {
        let defaults = Settings::default();
        let settings: Settings = Config::builder()
            .set_default("start", defaults.start as i64)?
            .set_default("end", defaults.end as i64)?
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default("progress_interval", defaults.progress_interval as i64)?
            .add_source(File::with_name("pinbase").required(false))
            .add_source(Environment::with_prefix("PINBASE"))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(PinbaseError::Config(format!(
                "start {:#06X} is beyond end {:#06X}",
                self.start, self.end
            )));
        }
        if char::from_u32(self.start).is_none() || char::from_u32(self.end).is_none() {
            return Err(PinbaseError::Config(
                "range bounds must be Unicode scalar values".into(),
            ));
        }
        Ok(())
    }
}
