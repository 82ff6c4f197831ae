use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::load_or_seed;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let records = load_or_seed(store)?;
    Ok(CmdResult::default().with_records(records))
}
