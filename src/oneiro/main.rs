use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use oneiro::api::{CmdMessage, JournalApi, JournalPaths, MessageLevel, ThemeAction};
use oneiro::config::Theme;
use oneiro::error::{JournalError, Result};
use oneiro::model::{mood_glyph, Category, DreamEntry, EntryDraft};
use oneiro::query::{CategoryFilter, JournalStats};
use oneiro::store::fs::FileStore;
use oneiro::symbols::SymbolMatch;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: JournalApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Record {
            title,
            content,
            category,
            mood,
            tags,
            lucid,
            recurring,
        }) => handle_record(&mut ctx, title, content, category, mood, tags, lucid, recurring),
        Some(Commands::List { search, category }) => handle_list(&ctx, search, category),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Theme { value }) => handle_theme(&ctx, value),
        None => handle_list(&ctx, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    // ONEIRO_HOME overrides the platform data dir; tests rely on it.
    let data_dir = match std::env::var_os("ONEIRO_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "oneiro", "oneiro")
            .ok_or_else(|| JournalError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let store = FileStore::new(data_dir.clone());
    let api = JournalApi::open(store, JournalPaths { data_dir })?;
    Ok(AppContext { api })
}

#[allow(clippy::too_many_arguments)]
fn handle_record(
    ctx: &mut AppContext,
    title: String,
    content: String,
    category: String,
    mood: u8,
    tags: String,
    lucid: bool,
    recurring: bool,
) -> Result<()> {
    let category = Category::from_key(&category)
        .ok_or_else(|| JournalError::Api(format!("Unknown category: {}", category)))?;

    let draft = EntryDraft {
        title,
        content,
        category,
        mood,
        tags,
        is_lucid: lucid,
        is_recurring: recurring,
    };

    let result = ctx.api.record_dream(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, category: Option<String>) -> Result<()> {
    let filter = match category.as_deref() {
        Some(key) => CategoryFilter::parse(key)?,
        None => CategoryFilter::All,
    };
    let term = search.unwrap_or_default();

    let result = ctx.api.list_dreams(&term, filter)?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: i64) -> Result<()> {
    let result = ctx.api.view_dream(id)?;
    for entry in &result.listed_entries {
        print_full_entry(entry, &result.symbols);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.delete_dream(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.dream_stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_dreams(output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &AppContext, value: Option<String>) -> Result<()> {
    let action = match value.as_deref() {
        None => ThemeAction::Show,
        Some("toggle") => ThemeAction::Toggle,
        Some(key) => Theme::from_key(key)
            .map(ThemeAction::Set)
            .ok_or_else(|| JournalError::Api(format!("Unknown theme: {}", key)))?,
    };

    let result = ctx.api.theme(action)?;
    if let Some(theme) = result.theme {
        println!("theme = {}", theme.key());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const LUCID_MARKER: &str = "✨";
const RECURRING_MARKER: &str = "🔄";

fn print_entries(entries: &[DreamEntry]) {
    for entry in entries {
        let id_str = format!("{}  ", entry.id);
        let glyph = format!("{} ", entry.category.glyph());

        let preview: String = entry
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = format!("{} {}", entry.title, preview);

        let mut right_suffix = String::new();
        if entry.is_lucid {
            right_suffix.push_str(LUCID_MARKER);
            right_suffix.push(' ');
        }
        if entry.is_recurring {
            right_suffix.push_str(RECURRING_MARKER);
            right_suffix.push(' ');
        }
        if right_suffix.is_empty() {
            right_suffix.push_str("  ");
        }

        let fixed_width =
            id_str.width() + glyph.width() + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}{}{}",
            id_str.yellow(),
            glyph,
            title_display,
            " ".repeat(padding),
            right_suffix,
            format_time_ago(entry.timestamp).dimmed()
        );
    }
}

fn print_full_entry(entry: &DreamEntry, symbols: &[SymbolMatch]) {
    println!("{} {}", entry.category.glyph(), entry.title.bold());

    let mut meta = format!(
        "📅 {} • {} Mood: {}/5",
        entry.date,
        mood_glyph(entry.mood),
        entry.mood
    );
    if entry.is_lucid {
        meta.push_str(" • ✨ Lucid");
    }
    if entry.is_recurring {
        meta.push_str(" • 🔄 Recurring");
    }
    println!("{}", meta.dimmed());

    println!("--------------------------------");
    println!("{}", entry.content);

    if !entry.tags.is_empty() {
        let tag_line = entry
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        println!();
        println!("{}", tag_line.cyan());
    }

    if !symbols.is_empty() {
        println!();
        println!("{}", "🔮 Dream Symbols Found:".bold());
        for m in symbols {
            println!("  {}: {}", m.symbol.yellow(), m.meaning);
        }
    }
}

fn print_stats(stats: &JournalStats) {
    println!("{}", "📊 Dream Statistics".bold());
    println!();
    println!("  🌙 Total dreams       {}", stats.total_dreams);
    println!(
        "  {} Average mood       {}/5",
        mood_glyph(stats.avg_mood.round() as u8),
        stats.avg_mood
    );
    println!(
        "  {} Most common        {}",
        stats.most_common_category.glyph(),
        stats.most_common_category.label()
    );
    println!("  ✨ Lucid dreams       {}", stats.lucid_count);
    println!("  🔄 Recurring dreams   {}", stats.recurring_count);

    if !stats.category_counts.is_empty() {
        println!();
        for (category, count) in &stats.category_counts {
            println!("  {} {:<18} {}", category.glyph(), category.label(), count);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
