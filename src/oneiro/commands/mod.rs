use std::path::PathBuf;

use crate::config::Theme;
use crate::model::DreamEntry;
use crate::query::JournalStats;
use crate::symbols::SymbolMatch;

pub mod delete;
pub mod export;
pub mod list;
pub mod record;
pub mod stats;
pub mod theme;
pub mod view;

/// Filesystem locations the commands may need (the data directory holding
/// journal.json and config.json).
#[derive(Debug, Clone)]
pub struct JournalPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<DreamEntry>,
    pub listed_entries: Vec<DreamEntry>,
    pub stats: Option<JournalStats>,
    pub symbols: Vec<SymbolMatch>,
    pub theme: Option<Theme>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<DreamEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DreamEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_stats(mut self, stats: JournalStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_symbols(mut self, symbols: Vec<SymbolMatch>) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}
