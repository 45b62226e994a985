//! In-memory storage backend.
//!
//! Clones share one slot, which lets a test inspect what the engine wrote or
//! hand the same record to a second "session".

use crate::domain::error::{JokeSorterError, Result};
use crate::storage::backend::Storage;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Rc<RefCell<Option<String>>>,
    reject_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend whose record already holds `contents`.
    #[must_use]
    pub fn with_record(contents: impl Into<String>) -> Self {
        Self {
            record: Rc::new(RefCell::new(Some(contents.into()))),
            reject_writes: false,
        }
    }

    /// Returns a handle on the same slot that fails every write, like a full quota.
    #[must_use]
    pub fn rejecting_writes(&self) -> Self {
        Self {
            record: Rc::clone(&self.record),
            reject_writes: true,
        }
    }

    /// Current record contents.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.record.borrow().clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.reject_writes {
            return Err(JokeSorterError::Storage("quota exceeded".to_string()));
        }
        *self.record.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}
