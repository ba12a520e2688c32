use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Creation-time-derived identifier (epoch milliseconds). Uniqueness within
/// one process is guaranteed by the journal's monotonic guard.
pub type EntryId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Normal,
    Nightmare,
    Lucid,
    Recurring,
    Prophetic,
    Flying,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Normal,
        Category::Nightmare,
        Category::Lucid,
        Category::Recurring,
        Category::Prophetic,
        Category::Flying,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Nightmare => "nightmare",
            Category::Lucid => "lucid",
            Category::Recurring => "recurring",
            Category::Prophetic => "prophetic",
            Category::Flying => "flying",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Normal => "😴",
            Category::Nightmare => "😰",
            Category::Lucid => "🧠",
            Category::Recurring => "🔄",
            Category::Prophetic => "🔮",
            Category::Flying => "🕊️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Normal => "Normal Dream",
            Category::Nightmare => "Nightmare",
            Category::Lucid => "Lucid Dream",
            Category::Recurring => "Recurring Dream",
            Category::Prophetic => "Prophetic Dream",
            Category::Flying => "Flying Dream",
        }
    }
}

/// Six-point mood scale, worst to best. `mood` values index into this table.
pub const MOOD_GLYPHS: [&str; 6] = ["😭", "😢", "😐", "🙂", "😊", "😍"];

pub fn mood_glyph(mood: u8) -> &'static str {
    MOOD_GLYPHS[mood.min(5) as usize]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DreamEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub mood: u8,
    pub tags: Vec<String>,
    #[serde(rename = "isLucid")]
    pub is_lucid: bool,
    #[serde(rename = "isRecurring")]
    pub is_recurring: bool,
    // Display date fixed at creation; never recomputed from `timestamp`.
    pub date: String,
    pub timestamp: DateTime<Utc>,
}

impl DreamEntry {
    /// Build a stored entry from a draft. Callers are responsible for
    /// rejecting drafts with empty titles or contents first.
    pub fn new(draft: EntryDraft, id: EntryId) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            category: draft.category,
            mood: draft.mood.min(5),
            tags: parse_tags(&draft.tags),
            is_lucid: draft.is_lucid,
            is_recurring: draft.is_recurring,
            date: Local::now().format("%-m/%-d/%Y").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Input to the record operation. `tags` is the raw comma-separated string
/// as typed by the user.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub mood: u8,
    pub tags: String,
    pub is_lucid: bool,
    pub is_recurring: bool,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: Category::Normal,
            mood: 5,
            tags: String::new(),
            is_lucid: false,
            is_recurring: false,
        }
    }
}

/// Split a raw tag string on commas, trim each piece, drop empties.
/// Insertion order is preserved and duplicates are allowed.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
