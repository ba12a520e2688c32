use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JournalError, Result};
use crate::export;
use crate::journal::Journal;
use crate::model::DreamEntry;
use crate::store::DataStore;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub fn run<S: DataStore>(journal: &Journal<S>, output: Option<PathBuf>) -> Result<CmdResult> {
    if journal.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No dreams to export."));
        return Ok(res);
    }

    let path =
        output.unwrap_or_else(|| PathBuf::from(export::filename(Local::now().date_naive())));
    let file = File::create(&path).map_err(JournalError::Io)?;
    write_document(file, journal.entries())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    Ok(result)
}

fn write_document<W: Write>(mut writer: W, entries: &[DreamEntry]) -> Result<()> {
    writer
        .write_all(export::render(entries).as_bytes())
        .map_err(JournalError::Io)
}
