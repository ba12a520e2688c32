use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::EntryDraft;
use crate::store::DataStore;

pub fn run<S: DataStore>(journal: &mut Journal<S>, draft: EntryDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match journal.add(draft)? {
        Some(entry) => {
            result.add_message(CmdMessage::success(format!(
                "Dream recorded: {}",
                entry.title
            )));
            let entry = entry.clone();
            result.affected_entries.push(entry);
        }
        None => {
            result.add_message(CmdMessage::info(
                "Nothing recorded: a dream needs both a title and a description.",
            ));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn records_a_valid_draft() {
        let mut journal = Journal::open(InMemoryStore::new()).unwrap();
        let result = run(&mut journal, EntryDraft::new("Flight", "over the bay")).unwrap();

        assert_eq!(journal.len(), 1);
        assert_eq!(result.affected_entries.len(), 1);
        assert_eq!(result.affected_entries[0].title, "Flight");
    }

    #[test]
    fn skips_blank_drafts_without_error() {
        let mut journal = Journal::open(InMemoryStore::new()).unwrap();
        let result = run(&mut journal, EntryDraft::new("  ", "content")).unwrap();

        assert_eq!(journal.len(), 0);
        assert!(result.affected_entries.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
