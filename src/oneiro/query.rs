//! Pure derived views over a journal snapshot: filtering and aggregate
//! statistics. Nothing here mutates or stores state; callers pass the
//! snapshot explicitly, which keeps every function unit-testable away from
//! any rendering or persistence concern.

use crate::error::{JournalError, Result};
use crate::model::{Category, DreamEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse the CLI-facing filter string: `all` or a category key.
    pub fn parse(s: &str) -> Result<CategoryFilter> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::from_key(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| JournalError::Api(format!("Unknown category: {}", s)))
    }

    fn matches(&self, entry: &DreamEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => entry.category == *cat,
        }
    }
}

/// Filter a snapshot by search term and category, preserving order.
///
/// The term matches case-insensitively as a substring of the title, the
/// content, or any tag. An empty term matches everything.
pub fn filter<'a>(
    snapshot: &'a [DreamEntry],
    term: &str,
    category: CategoryFilter,
) -> Vec<&'a DreamEntry> {
    let term_lower = term.to_lowercase();
    snapshot
        .iter()
        .filter(|entry| category.matches(entry))
        .filter(|entry| {
            if term_lower.is_empty() {
                return true;
            }
            entry.title.to_lowercase().contains(&term_lower)
                || entry.content.to_lowercase().contains(&term_lower)
                || entry
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&term_lower))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct JournalStats {
    pub total_dreams: usize,
    /// Mean mood rounded to one decimal place; 0.0 for an empty snapshot.
    pub avg_mood: f64,
    /// Only categories actually present, in first-encountered order.
    pub category_counts: Vec<(Category, usize)>,
    pub most_common_category: Category,
    pub lucid_count: usize,
    pub recurring_count: usize,
}

/// Aggregate a snapshot in a single pass.
pub fn stats(snapshot: &[DreamEntry]) -> JournalStats {
    let mut mood_sum: u64 = 0;
    let mut category_counts: Vec<(Category, usize)> = Vec::new();
    let mut lucid_count = 0;
    let mut recurring_count = 0;

    for entry in snapshot {
        mood_sum += u64::from(entry.mood);
        match category_counts.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, count)) => *count += 1,
            None => category_counts.push((entry.category, 1)),
        }
        if entry.is_lucid {
            lucid_count += 1;
        }
        if entry.is_recurring {
            recurring_count += 1;
        }
    }

    let total_dreams = snapshot.len();
    let avg_mood = if total_dreams == 0 {
        0.0
    } else {
        (mood_sum as f64 / total_dreams as f64 * 10.0).round() / 10.0
    };

    // Ties go to the category encountered first, not alphabetical order.
    let mut most_common_category = Category::Normal;
    let mut best = 0;
    for &(category, count) in &category_counts {
        if count > best {
            most_common_category = category;
            best = count;
        }
    }

    JournalStats {
        total_dreams,
        avg_mood,
        category_counts,
        most_common_category,
        lucid_count,
        recurring_count,
    }
}
