use super::DataStore;
use crate::error::Result;
use crate::model::DreamEntry;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<DreamEntry>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots written so far. Lets tests assert the
    /// write-through policy without a filesystem.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_entries(&self) -> Result<Vec<DreamEntry>> {
        Ok(self.entries.clone())
    }

    fn save_entries(&mut self, entries: &[DreamEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, DreamEntry, EntryDraft};
    use crate::store::DataStore;

    /// Pre-populated store builder for tests.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn with_entry(self, title: &str, content: &str) -> Self {
            self.push(EntryDraft::new(title, content))
        }

        pub fn with_categorized_entry(self, title: &str, category: Category) -> Self {
            let mut draft = EntryDraft::new(title, "some content");
            draft.category = category;
            self.push(draft)
        }

        fn push(mut self, draft: EntryDraft) -> Self {
            let entry = DreamEntry::new(draft, self.next_id);
            self.next_id += 1;
            let mut entries = self.store.load_entries().unwrap();
            entries.insert(0, entry);
            self.store.save_entries(&entries).unwrap();
            self
        }
    }
}
