use crate::commands::{CmdMessage, CmdResult};
use crate::config::ScheduleConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = ScheduleConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ScheduleConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ScheduleConfig::load_unchecked(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            let mut result = CmdResult::default().with_config(config);
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::{KEY_END_HOUR, KEY_INTERVAL};
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ScheduleConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::Set(KEY_END_HOUR.into(), "22".into());
        let result = run(dir.path(), action).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(dir.path(), ConfigAction::ShowKey(KEY_END_HOUR.into())).unwrap();
        assert_eq!(shown.messages[0].content, "22");
    }

    #[test]
    fn invalid_value_is_reported_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::Set(KEY_INTERVAL.into(), "48".into());
        let result = run(dir.path(), action).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn set_repairs_out_of_range_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"interval_hours": 4000000000}"#,
        )
        .unwrap();
        assert!(run(dir.path(), ConfigAction::ShowAll).is_err());

        let action = ConfigAction::Set(KEY_INTERVAL.into(), "4".into());
        let result = run(dir.path(), action).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(ScheduleConfig::load(dir.path()).unwrap().interval_hours, 4);
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
