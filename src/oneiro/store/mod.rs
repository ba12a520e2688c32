//! # Storage Layer
//!
//! This module defines the storage abstraction for oneiro. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole journal serialized as a JSON array in `journal.json`
//!   - Written through in full on every mutation; there is no partial write
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`, everything lives in one data directory:
//! ```text
//! <data dir>/
//! ├── journal.json        # All dream entries (JSON array, newest first)
//! └── config.json         # Theme preference (see config.rs)
//! ```
//!
//! The journal and the config are independent records: a corrupt or missing
//! journal never touches the theme preference, and vice versa.

use crate::error::Result;
use crate::model::DreamEntry;

pub mod fs;
pub mod memory;

/// Abstract interface for journal persistence.
///
/// The journal is persisted as a whole: `load_entries` returns the complete
/// snapshot in stored (newest-first) order, and `save_entries` replaces it.
pub trait DataStore {
    /// Load the persisted snapshot. An absent or unreadable payload loads
    /// as an empty journal rather than an error.
    fn load_entries(&self) -> Result<Vec<DreamEntry>>;

    /// Replace the persisted snapshot with `entries`, preserving order.
    fn save_entries(&mut self, entries: &[DreamEntry]) -> Result<()>;
}
