//! JSON file storage backend.
//!
//! Keeps the record in a single file and replaces it with an atomic write
//! (write-to-temp + rename), so a crash mid-write never leaves a truncated
//! record behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "sortedJokes": [
//!     {
//!       "id": "R7UfaahVfFd",
//!       "joke": "My dog used to chase people on a bike a lot. It got so bad I had to take his bike away.",
//!       "reaction": "loved",
//!       "timeShown": 7,
//!       "startTime": 1718000000000
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use std::path::{Path, PathBuf};

/// File name of the persisted record inside the data directory.
pub const RECORD_FILE_NAME: &str = "joke-sorter-data.json";

/// File-backed storage for the sorter's record.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    file_path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend writing to `file_path`.
    ///
    /// Nothing touches the disk until the first read or write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Creates a backend for the standard record file inside `data_dir`.
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(RECORD_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl Storage for JsonFileStorage {
    fn read(&self) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_read", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no record on disk yet");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        tracing::debug!(bytes = contents.len(), "record read");
        Ok(Some(contents))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_write", path = ?self.file_path).entered();

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(bytes = contents.len(), "record written");
        Ok(())
    }
}
