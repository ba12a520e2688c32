use crate::commands::CmdResult;
use crate::error::Result;
use crate::journal::Journal;
use crate::query;
use crate::store::DataStore;

pub fn run<S: DataStore>(journal: &Journal<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(query::stats(journal.entries())))
}
