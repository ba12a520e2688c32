use super::DataStore;
use crate::error::{JournalError, Result};
use crate::model::DreamEntry;
use std::fs;
use std::path::{Path, PathBuf};

const JOURNAL_FILENAME: &str = "journal.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn journal_path(&self) -> PathBuf {
        self.data_dir.join(JOURNAL_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(JournalError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_entries(&self) -> Result<Vec<DreamEntry>> {
        let journal_file = self.journal_path();
        if !journal_file.exists() {
            return Ok(Vec::new());
        }
        // A payload we cannot read or parse counts as "no prior data".
        let content = match fs::read_to_string(&journal_file) {
            Ok(content) => content,
            Err(_) => return Ok(Vec::new()),
        };
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_entries(&mut self, entries: &[DreamEntry]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(entries).map_err(JournalError::Serialization)?;
        fs::write(self.journal_path(), content).map_err(JournalError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DreamEntry, EntryDraft};

    fn sample(id: i64, title: &str) -> DreamEntry {
        DreamEntry::new(EntryDraft::new(title, "some content"), id)
    }

    #[test]
    fn loads_empty_when_nothing_persisted() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp.path().join("data"));
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn round_trips_entries_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        let entries = vec![sample(2, "Newest"), sample(1, "Oldest")];
        store.save_entries(&entries).unwrap();

        let loaded = store.load_entries().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn malformed_journal_loads_as_empty() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save_entries(&[sample(1, "A")]).unwrap();

        std::fs::write(store.journal_path(), "{ not json").unwrap();
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn persisted_payload_uses_original_field_names() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.save_entries(&[sample(1, "A")]).unwrap();

        let raw = std::fs::read_to_string(store.journal_path()).unwrap();
        assert!(raw.contains("\"isLucid\""));
        assert!(raw.contains("\"timestamp\""));
    }
}
