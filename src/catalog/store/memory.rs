use super::Storage;
use crate::error::{CatalogError, Result};
use std::cell::{Cell, RefCell};

/// In-memory storage for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is single-threaded,
/// so the `Storage` trait can keep `&self` for writes.
#[derive(Default)]
pub struct MemStorage {
    text: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing document, as if read from disk.
    pub fn with_text(text: impl Into<String>) -> Self {
        let storage = Self::new();
        *storage.text.borrow_mut() = Some(text.into());
        storage
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// The current document, if anything was written.
    pub fn contents(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for MemStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.text.borrow().clone())
    }

    fn write(&self, text: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(CatalogError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        *self.text.borrow_mut() = Some(text.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://products.json".to_string()
    }
}
