//! Flat-file JSON memory store.
//!
//! The whole mapping lives in one pretty-printed JSON file. Every save
//! rewrites the file completely; there is no atomic rename and no backup.
//! A missing file means "no memories yet"; a present-but-malformed file is
//! an error the caller must surface.

use std::path::PathBuf;

use emilia_core::memory::store::MemoryStore;
use emilia_types::error::MemoryError;
use emilia_types::memory::MemoryMap;

/// [`MemoryStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonMemoryStore {
    path: PathBuf,
}

impl JsonMemoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl MemoryStore for JsonMemoryStore {
    async fn load(&self) -> Result<MemoryMap, MemoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(MemoryMap::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, map: &MemoryMap) -> Result<(), MemoryError> {
        // serde_json pretty printing is the 2-space indent the file format
        // has always used.
        let json = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
