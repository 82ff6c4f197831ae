use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::helpers::load_or_seed;

/// Picks one record uniformly from the whole collection. Repeats across calls
/// are expected; no history is kept.
pub fn run<S: DataStore, R: Rng + ?Sized>(store: &mut S, rng: &mut R) -> Result<CmdResult> {
    let records = load_or_seed(store)?;
    let picked = records.choose(rng).cloned();

    let mut result = CmdResult::default();
    if picked.is_none() {
        result.add_message(CmdMessage::info("No thoughts stored."));
    }
    Ok(result.with_picked(picked).with_records(records))
}
