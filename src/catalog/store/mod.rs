//! # Storage Layer
//!
//! The catalog is persisted as a single JSON document. This module splits that
//! into two small pieces:
//!
//! - [`Storage`]: raw text I/O for one named location. It knows nothing about JSON.
//! - [`json`]: conversion between that text and the [`Records`](crate::model::Records)
//!   mapping. It knows nothing about files.
//!
//! The [`ProductRepository`](crate::repository::ProductRepository) combines both.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: production storage on a file path
//! - [`memory::MemStorage`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "1": {
//!         "name": "Widget",
//!         "price": "9.99",
//!         "quantity": "5"
//!     }
//! }
//! ```
//!
//! Every write replaces the whole document. There is no locking and no
//! protection against a crash mid-write.

use crate::error::Result;

pub mod fs;
pub mod json;
pub mod memory;

/// Raw text storage for the catalog document.
pub trait Storage {
    /// Read the whole document.
    /// Returns Ok(None) if it does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<String>>;

    /// Replace the whole document.
    fn write(&self, text: &str) -> Result<()>;

    /// Where the document lives, for messages and logs.
    fn location(&self) -> String;
}
