use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::query::{self, CategoryFilter};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    journal: &Journal<S>,
    term: &str,
    category: CategoryFilter,
) -> Result<CmdResult> {
    let listed: Vec<_> = query::filter(journal.entries(), term, category)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if journal.is_empty() {
        result.add_message(CmdMessage::info(
            "Start recording your dreams to build your personal dream journal.",
        ));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info("No dreams match your search criteria."));
    }

    Ok(result.with_listed_entries(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn journal_with_two() -> Journal<InMemoryStore> {
        let fixture = StoreFixture::new()
            .with_entry("Ocean", "swimming in water")
            .with_categorized_entry("Chase", Category::Nightmare);
        Journal::open(fixture.store).unwrap()
    }

    #[test]
    fn lists_everything_by_default() {
        let journal = journal_with_two();
        let result = run(&journal, "", CategoryFilter::All).unwrap();
        assert_eq!(result.listed_entries.len(), 2);
        // Newest first.
        assert_eq!(result.listed_entries[0].title, "Chase");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn narrows_by_term_and_category() {
        let journal = journal_with_two();
        let by_term = run(&journal, "water", CategoryFilter::All).unwrap();
        assert_eq!(by_term.listed_entries.len(), 1);
        assert_eq!(by_term.listed_entries[0].title, "Ocean");

        let by_cat = run(&journal, "", CategoryFilter::Only(Category::Nightmare)).unwrap();
        assert_eq!(by_cat.listed_entries.len(), 1);
        assert_eq!(by_cat.listed_entries[0].title, "Chase");
    }

    #[test]
    fn empty_journal_gets_a_starter_message() {
        let journal = Journal::open(InMemoryStore::new()).unwrap();
        let result = run(&journal, "", CategoryFilter::All).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn no_match_gets_a_no_match_message() {
        let journal = journal_with_two();
        let result = run(&journal, "volcano", CategoryFilter::All).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
