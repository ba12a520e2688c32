use chrono::Utc;

use crate::error::Result;
use crate::model::{DreamEntry, EntryDraft, EntryId};
use crate::store::DataStore;

/// The entry store: an ordered, newest-first collection of dream entries
/// with injected persistence. Constructed once per process; every mutation
/// writes the full snapshot through to the backing store.
pub struct Journal<S: DataStore> {
    store: S,
    entries: Vec<DreamEntry>,
    last_id: EntryId,
}

impl<S: DataStore> Journal<S> {
    /// Load the persisted snapshot once. Absent or malformed payloads open
    /// as an empty journal.
    pub fn open(store: S) -> Result<Self> {
        let entries = store.load_entries()?;
        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Ok(Self {
            store,
            entries,
            last_id,
        })
    }

    /// Read-only snapshot, newest first. This is the view the query engine
    /// and export formatter operate on.
    pub fn entries(&self) -> &[DreamEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&DreamEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Ids are epoch milliseconds, bumped past the last assigned id so that
    // rapid successive inserts within one clock tick cannot collide.
    fn next_id(&mut self) -> EntryId {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id
    }

    /// Record a new dream at the front of the journal.
    ///
    /// Drafts whose title or content trim to empty are skipped: no entry is
    /// created, nothing is written, and `None` is returned.
    pub fn add(&mut self, draft: EntryDraft) -> Result<Option<&DreamEntry>> {
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            return Ok(None);
        }

        let id = self.next_id();
        let entry = DreamEntry::new(draft, id);
        self.entries.insert(0, entry);
        self.store.save_entries(&self.entries)?;
        Ok(self.entries.first())
    }

    /// Remove the entry with the given id, returning it. Removing an absent
    /// id is a no-op returning `None`; nothing is written.
    pub fn remove(&mut self, id: EntryId) -> Result<Option<DreamEntry>> {
        let pos = match self.entries.iter().position(|e| e.id == id) {
            Some(pos) => pos,
            None => return Ok(None),
        };
        let removed = self.entries.remove(pos);
        self.store.save_entries(&self.entries)?;
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryDraft;
    use crate::store::memory::InMemoryStore;

    fn open_empty() -> Journal<InMemoryStore> {
        Journal::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut journal = open_empty();
        journal.add(EntryDraft::new("First", "a")).unwrap();
        journal.add(EntryDraft::new("Second", "b")).unwrap();

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.entries()[0].title, "Second");
        assert_eq!(journal.entries()[1].title, "First");
    }

    #[test]
    fn add_skips_blank_title_or_content() {
        let mut journal = open_empty();
        assert!(journal.add(EntryDraft::new("   ", "content")).unwrap().is_none());
        assert!(journal.add(EntryDraft::new("title", "\t\n")).unwrap().is_none());
        assert_eq!(journal.len(), 0);
        // Skipped adds must not touch the store either.
        assert_eq!(journal.store().save_count(), 0);
    }

    #[test]
    fn add_trims_title_and_content() {
        let mut journal = open_empty();
        let entry = journal
            .add(EntryDraft::new("  Falling  ", "  down a well  "))
            .unwrap()
            .unwrap();
        assert_eq!(entry.title, "Falling");
        assert_eq!(entry.content, "down a well");
    }

    #[test]
    fn ids_strictly_increase_under_rapid_adds() {
        let mut journal = open_empty();
        let mut ids = Vec::new();
        for i in 0..10 {
            let entry = journal
                .add(EntryDraft::new(format!("Dream {}", i), "content"))
                .unwrap()
                .unwrap();
            ids.push(entry.id);
        }
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "ids must be strictly increasing");
        }
    }

    #[test]
    fn open_seeds_id_guard_from_persisted_entries() {
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        let mut store = InMemoryStore::new();
        let existing = DreamEntry::new(EntryDraft::new("Old", "content"), far_future);
        store.save_entries(&[existing]).unwrap();

        let mut journal = Journal::open(store).unwrap();
        let entry = journal.add(EntryDraft::new("New", "content")).unwrap().unwrap();
        assert!(entry.id > far_future);
    }

    #[test]
    fn remove_existing_drops_exactly_one() {
        let mut journal = open_empty();
        journal.add(EntryDraft::new("Keep", "a")).unwrap();
        let id = journal.add(EntryDraft::new("Drop", "b")).unwrap().unwrap().id;

        let removed = journal.remove(id).unwrap().unwrap();
        assert_eq!(removed.title, "Drop");
        assert_eq!(journal.len(), 1);
        assert!(journal.get(id).is_none());
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut journal = open_empty();
        journal.add(EntryDraft::new("Only", "a")).unwrap();
        let saves_before = journal.store().save_count();

        assert!(journal.remove(12345).unwrap().is_none());
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.store().save_count(), saves_before);
    }

    #[test]
    fn every_mutation_writes_through() {
        let mut journal = open_empty();
        journal.add(EntryDraft::new("A", "a")).unwrap();
        assert_eq!(journal.store().save_count(), 1);
        let id = journal.entries()[0].id;
        journal.remove(id).unwrap();
        assert_eq!(journal.store().save_count(), 2);
    }

    #[test]
    fn reopen_yields_identical_sequence() {
        let mut journal = open_empty();
        let mut draft = EntryDraft::new("Vivid", "flying over water");
        draft.tags = "flying, water".into();
        draft.is_lucid = true;
        journal.add(draft).unwrap();
        journal.add(EntryDraft::new("Faint", "a corridor")).unwrap();

        let snapshot = journal.entries().to_vec();
        let mut store = InMemoryStore::new();
        store.save_entries(&snapshot).unwrap();
        let reopened = Journal::open(store).unwrap();
        assert_eq!(reopened.entries(), snapshot.as_slice());
    }
}
