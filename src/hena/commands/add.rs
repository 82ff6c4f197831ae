use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use log::debug;

use super::helpers::{load_or_seed, next_id};

/// Appends `record` under a freshly assigned id. Any id already on `record` is
/// ignored.
pub fn run<S: DataStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let mut records = load_or_seed(store)?;
    let id = next_id(&records)?;
    let added = Record { id, ..record };
    debug!("adding record {} ({})", id, added.title);

    records.push(added.clone());
    store.save_records(&records)?;

    let mut result = CmdResult::default()
        .with_records(records)
        .with_affected_records(vec![added.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Thought added (#{}): {}",
        id, added.title
    )));
    Ok(result)
}
