//! Flat-text rendering of the journal for export. Entries render in
//! snapshot order into a fixed template; writing the result to a file is
//! the export command's job.

use chrono::NaiveDate;

use crate::model::{mood_glyph, DreamEntry};

const SEPARATOR_WIDTH: usize = 50;

/// Render the whole snapshot, newest first, one block per entry.
pub fn render(snapshot: &[DreamEntry]) -> String {
    let mut out = String::new();
    for entry in snapshot {
        render_entry(&mut out, entry);
    }
    out
}

fn render_entry(out: &mut String, entry: &DreamEntry) {
    out.push_str(&format!("📅 {}\n", entry.date));
    out.push_str(&format!("🌙 {}\n", entry.title));
    out.push_str(&format!(
        "{} {}\n",
        entry.category.glyph(),
        entry.category.label()
    ));
    out.push_str(&format!(
        "{} Mood: {}/5\n",
        mood_glyph(entry.mood),
        entry.mood
    ));
    out.push('\n');
    out.push_str(&entry.content);
    out.push_str("\n\n");
    if !entry.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", entry.tags.join(", ")));
    }
    if entry.is_lucid {
        out.push_str("✨ Lucid Dream\n");
    }
    if entry.is_recurring {
        out.push_str("🔄 Recurring Dream\n");
    }
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");
}

/// Dated default filename for the export artifact.
pub fn filename(date: NaiveDate) -> String {
    format!("dream-journal-{}.txt", date.format("%Y-%m-%d"))
}
