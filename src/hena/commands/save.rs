use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Overwrites the stored collection with `records`, as given.
pub fn run<S: DataStore>(store: &mut S, records: Vec<Record>) -> Result<CmdResult> {
    store.save_records(&records)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} thoughts",
        records.len()
    )));
    Ok(result.with_records(records))
}
