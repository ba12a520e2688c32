use crate::commands::CmdResult;
use crate::error::{JournalError, Result};
use crate::journal::Journal;
use crate::model::EntryId;
use crate::store::DataStore;
use crate::symbols;

pub fn run<S: DataStore>(journal: &Journal<S>, id: EntryId) -> Result<CmdResult> {
    let entry = journal
        .get(id)
        .ok_or(JournalError::EntryNotFound(id))?
        .clone();
    let matches = symbols::find_symbols(&entry.content);

    Ok(CmdResult::default()
        .with_listed_entries(vec![entry])
        .with_symbols(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryDraft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn attaches_symbol_matches() {
        let mut journal = Journal::open(InMemoryStore::new()).unwrap();
        journal
            .add(EntryDraft::new("Vivid", "I was flying over water"))
            .unwrap();
        let id = journal.entries()[0].id;

        let result = run(&journal, id).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        let found: Vec<&str> = result.symbols.iter().map(|m| m.symbol).collect();
        assert_eq!(found, vec!["water", "flying"]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let journal = Journal::open(InMemoryStore::new()).unwrap();
        assert!(matches!(
            run(&journal, 7),
            Err(JournalError::EntryNotFound(7))
        ));
    }
}
