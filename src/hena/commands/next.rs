use crate::commands::{CmdMessage, CmdResult};
use crate::config::ScheduleConfig;
use crate::trigger;
use chrono::{DateTime, TimeZone};

pub fn run<Tz: TimeZone>(config: &ScheduleConfig, now: &DateTime<Tz>) -> CmdResult {
    let next = trigger::plan(now, config).map(|dt| dt.fixed_offset());

    let mut result = CmdResult::default().with_config(*config);
    if next.is_none() {
        result.add_message(CmdMessage::info("Reminders are disabled."));
    }
    result.with_next_trigger(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn now() -> DateTime<FixedOffset> {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        tz.from_local_datetime(&local).unwrap()
    }

    #[test]
    fn reports_next_trigger() {
        let result = run(&ScheduleConfig::default(), &now());
        let next = result.next_trigger.unwrap();
        assert_eq!(
            next.naive_local(),
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
        assert_eq!(next.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn disabled_schedule_has_no_trigger() {
        let config = ScheduleConfig {
            enabled: false,
            ..ScheduleConfig::default()
        };
        let result = run(&config, &now());
        assert!(result.next_trigger.is_none());
        assert_eq!(result.messages.len(), 1);
    }
}
