use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::EntryId;
use crate::store::DataStore;

pub fn run<S: DataStore>(journal: &mut Journal<S>, id: EntryId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match journal.remove(id)? {
        Some(entry) => {
            result.add_message(CmdMessage::success(format!(
                "Dream deleted: {}",
                entry.title
            )));
            result.affected_entries.push(entry);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No dream with id {}.", id)));
        }
    }

    Ok(result)
}
