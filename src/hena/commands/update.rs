use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use log::debug;

use super::helpers::load_or_seed;

/// Replaces the first record sharing `record.id`, keeping its position.
///
/// An unknown id leaves the collection as it was; it is still written back.
pub fn run<S: DataStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let mut records = load_or_seed(store)?;
    let position = records.iter().position(|r| r.id == record.id);

    let mut affected = Vec::new();
    if let Some(index) = position {
        records[index] = record.clone();
        affected.push(record.clone());
    }
    store.save_records(&records)?;

    let mut result = CmdResult::default()
        .with_records(records)
        .with_affected_records(affected);
    match position {
        Some(_) => result.add_message(CmdMessage::success(format!(
            "Thought updated (#{}): {}",
            record.id, record.title
        ))),
        None => {
            debug!("update skipped, no record {}", record.id);
            result.add_message(CmdMessage::warning(format!(
                "No thought with id {}",
                record.id
            )))
        }
    }
    Ok(result)
}
