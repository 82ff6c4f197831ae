//! The default collection shipped inside the binary, used only to seed an empty
//! store on first run.

use crate::error::{HenaError, Result};
use crate::model::Record;

const BUNDLED_RECORDS: &str = include_str!("../../data/default_records.json");

pub fn bundled_records() -> Result<Vec<Record>> {
    serde_json::from_str(BUNDLED_RECORDS).map_err(HenaError::Serialization)
}
