//! Record stores for hall-of-fame entries
//!
//! Stores keep entries newest first.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::HallOfFameEntry;
use crate::core::error::Result;

pub trait RecordStore {
    fn append(&mut self, entry: HallOfFameEntry) -> Result<()>;

    /// Every stored entry, newest first
    fn load_all(&self) -> Result<Vec<HallOfFameEntry>>;
}

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    entries: Vec<HallOfFameEntry>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn append(&mut self, entry: HallOfFameEntry) -> Result<()> {
        self.entries.insert(0, entry);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<HallOfFameEntry>> {
        Ok(self.entries.clone())
    }
}

/// Entries persisted as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileRecordStore {
    fn append(&mut self, entry: HallOfFameEntry) -> Result<()> {
        let mut entries = self.load_all()?;
        entries.insert(0, entry);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), entries = entries.len(), "hall of fame saved");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<HallOfFameEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
