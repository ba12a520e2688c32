//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all oneiro operations, regardless of the UI in
//! front of it.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It holds no business logic, performs no I/O
//! of its own, and never formats output; those concerns live in
//! `commands/*.rs` and the CLI respectively.
//!
//! `JournalApi<S: DataStore>` is generic over the storage backend:
//! - Production: `JournalApi<FileStore>`
//! - Testing: `JournalApi<InMemoryStore>`

use std::path::PathBuf;

use crate::commands;
use crate::error::Result;
use crate::journal::Journal;
use crate::model::{EntryDraft, EntryId};
use crate::query::CategoryFilter;
use crate::store::DataStore;

/// The main API facade for oneiro operations.
///
/// Owns the journal (the in-memory snapshot plus its injected persistence)
/// for the lifetime of the process. All UI clients should interact through
/// this API.
pub struct JournalApi<S: DataStore> {
    journal: Journal<S>,
    paths: commands::JournalPaths,
}

impl<S: DataStore> JournalApi<S> {
    pub fn new(journal: Journal<S>, paths: commands::JournalPaths) -> Self {
        Self { journal, paths }
    }

    /// Open the journal from the given store and wrap it.
    pub fn open(store: S, paths: commands::JournalPaths) -> Result<Self> {
        Ok(Self::new(Journal::open(store)?, paths))
    }

    pub fn record_dream(&mut self, draft: EntryDraft) -> Result<commands::CmdResult> {
        commands::record::run(&mut self.journal, draft)
    }

    pub fn delete_dream(&mut self, id: EntryId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.journal, id)
    }

    pub fn list_dreams(&self, term: &str, category: CategoryFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.journal, term, category)
    }

    pub fn view_dream(&self, id: EntryId) -> Result<commands::CmdResult> {
        commands::view::run(&self.journal, id)
    }

    pub fn dream_stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.journal)
    }

    pub fn export_dreams(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.journal, output)
    }

    pub fn theme(&self, action: ThemeAction) -> Result<commands::CmdResult> {
        commands::theme::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::JournalPaths {
        &self.paths
    }
}

pub use crate::commands::theme::ThemeAction;
pub use crate::commands::{CmdMessage, CmdResult, JournalPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> JournalApi<InMemoryStore> {
        let paths = JournalPaths {
            data_dir: std::env::temp_dir(),
        };
        JournalApi::open(InMemoryStore::new(), paths).unwrap()
    }

    #[test]
    fn record_then_list_dispatches() {
        let mut api = api();
        api.record_dream(EntryDraft::new("Drift", "down a river")).unwrap();

        let result = api.list_dreams("", CategoryFilter::All).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
    }

    #[test]
    fn stats_come_back_structured() {
        let api = api();
        let result = api.dream_stats().unwrap();
        assert!(result.stats.is_some());
    }
}
