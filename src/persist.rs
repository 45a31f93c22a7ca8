//! Writes the assembled database to its JSON artifact.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assemble::PinyinDatabase;
use crate::error::{PinbaseError, Result};

/// Persists the database as pretty-printed JSON, keyed by the literal
/// glyph, with non-ASCII content emitted verbatim. Serialization goes to
/// a sibling staging file first and is renamed into place, so a failed
/// run never leaves a partial artifact at the target path.
pub struct Persistor {
    path: PathBuf,
}

impl Persistor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the artifact and returns its size in bytes.
    pub fn persist(&self, database: &PinyinDatabase) -> Result<u64> {
        let rendered = serde_json::to_vec_pretty(database)?;
        let staging = self.staging_path();
        fs::write(&staging, &rendered)
            .map_err(|e| PinbaseError::ArtifactWrite(format!("{}: {}", staging.display(), e)))?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(PinbaseError::ArtifactWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )));
        }
        Ok(rendered.len() as u64)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "artifact".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
