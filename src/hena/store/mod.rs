//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the record collection lives. Backends
//! only move the whole collection in and out; seeding, id assignment and the
//! read-modify-write cycle live in `commands`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array in `records.json`
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── records.json   # [{"id", "category", "title", "content"}, ...]
//! └── config.json    # schedule settings
//! ```
//!
//! There is no locking. Two processes mutating the same directory race and the
//! last write wins.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the persisted collection in storage order.
    ///
    /// Returns `Ok(None)` when nothing has ever been saved, which is what
    /// triggers first-run seeding. Data that exists but cannot be parsed is an
    /// error.
    fn load_records(&self) -> Result<Option<Vec<Record>>>;

    /// Replace the persisted collection.
    fn save_records(&mut self, records: &[Record]) -> Result<()>;
}
