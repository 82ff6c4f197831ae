//! # Next Trigger Calculation
//!
//! Maps "now + interval" onto the daily active window:
//!
//! 1. `candidate = now + interval_hours`
//! 2. If the candidate's hour is outside `[active_start_hour, active_end_hour)`
//!    it is clamped to `active_start_hour:00:00`, on the next day when the hour
//!    is at or past the end of the window, otherwise on the same day.
//!
//! The window test is the literal `hour < start || hour >= end`. Nothing checks
//! that `start < end`, so an "overnight" window such as 22..6 rejects every hour
//! and always clamps to the start hour. Callers wanting wrap-around windows
//! need a different policy; this one is kept as-is.
//!
//! Everything here is pure: no clock reads, no I/O.

use crate::config::ScheduleConfig;
use chrono::{
    DateTime, Days, LocalResult, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
};

/// Wall-clock form of the calculation.
pub fn next_trigger_naive(now: NaiveDateTime, config: &ScheduleConfig) -> NaiveDateTime {
    let candidate = now + interval(config);
    clamp_to_window(candidate, config).unwrap_or(candidate)
}

/// Zoned form: the interval is an absolute duration, the window is applied to
/// the local wall clock of `now`'s time zone.
pub fn next_trigger<Tz: TimeZone>(now: &DateTime<Tz>, config: &ScheduleConfig) -> DateTime<Tz> {
    let candidate = now.clone() + interval(config);
    match clamp_to_window(candidate.naive_local(), config) {
        Some(local) => resolve_local(&now.timezone(), local),
        None => candidate,
    }
}

/// The instant the reminder should be armed for, or `None` while reminders are
/// switched off.
pub fn plan<Tz: TimeZone>(now: &DateTime<Tz>, config: &ScheduleConfig) -> Option<DateTime<Tz>> {
    if !config.enabled {
        return None;
    }
    Some(next_trigger(now, config))
}

fn interval(config: &ScheduleConfig) -> TimeDelta {
    TimeDelta::hours(i64::from(config.interval_hours))
}

/// Returns the clamped wall-clock time, or `None` when `candidate` already sits
/// inside the window.
fn clamp_to_window(candidate: NaiveDateTime, config: &ScheduleConfig) -> Option<NaiveDateTime> {
    let hour = candidate.hour();
    if hour < config.active_start_hour || hour >= config.active_end_hour {
        let mut date = candidate.date();
        if hour >= config.active_end_hour {
            date = date + Days::new(1);
        }
        // Start hours past 23 roll into the next day.
        let start = TimeDelta::hours(i64::from(config.active_start_hour));
        return Some(date.and_time(NaiveTime::MIN) + start);
    }
    None
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Inside a DST gap: the wall-clock time does not exist, move past it.
        LocalResult::None => match tz.from_local_datetime(&(local + TimeDelta::hours(1))) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => tz.from_utc_datetime(&local),
        },
    }
}
