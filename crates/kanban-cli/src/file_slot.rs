use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use kanban_core::PersistenceSlot;
use tempfile::NamedTempFile;
use tracing::debug;

/// Board slot backed by a single JSON file.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the target, so a crash mid-write never leaves a half-written board.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PersistenceSlot for FileSlot {
    #[tracing::instrument(skip(self), fields(file = %self.path.display()))]
    fn read(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            debug!("board file does not exist");
            return Ok(None);
        }
        let blob = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading {}", self.path.display()))?;
        Ok(Some(blob))
    }

    #[tracing::instrument(skip(self, blob), fields(file = %self.path.display(), bytes = blob.len()))]
    fn write(&mut self, blob: &str) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(blob.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)
            .map_err(|err| anyhow!("failed to persist {}: {}", self.path.display(), err))?;

        debug!("wrote board file");
        Ok(())
    }
}
