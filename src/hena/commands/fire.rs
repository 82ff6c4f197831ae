use crate::commands::{CmdMessage, CmdResult};
use crate::config::ScheduleConfig;
use crate::error::Result;
use crate::store::DataStore;
use crate::trigger;
use chrono::{DateTime, TimeZone};
use log::info;
use rand::Rng;

use super::random;

/// One reminder cycle: pick a thought to show, then work out when to fire
/// again.
///
/// The next trigger is planned even when there is nothing to show, so an empty
/// collection does not leave the schedule unarmed.
pub fn run<S, R, Tz>(
    store: &mut S,
    config: &ScheduleConfig,
    now: &DateTime<Tz>,
    rng: &mut R,
) -> Result<CmdResult>
where
    S: DataStore,
    R: Rng + ?Sized,
    Tz: TimeZone,
{
    let mut result = random::run(store, rng)?;
    let next = trigger::plan(now, config).map(|dt| dt.fixed_offset());

    match &next {
        Some(at) => info!("next reminder at {}", at.to_rfc3339()),
        None => result.add_message(CmdMessage::info("Reminders are disabled.")),
    }
    Ok(result.with_next_trigger(next).with_config(*config))
}
