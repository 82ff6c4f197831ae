use crate::config::ScheduleConfig;
use crate::model::Record;
use chrono::{DateTime, FixedOffset};

pub mod add;
pub mod config;
pub mod delete;
pub mod fire;
pub mod helpers;
pub mod list;
pub mod next;
pub mod random;
pub mod save;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of a command.
///
/// Store commands always report the full collection as it was persisted in
/// `records`; `affected_records` holds only what the command touched.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub affected_records: Vec<Record>,
    pub picked: Option<Record>,
    pub next_trigger: Option<DateTime<FixedOffset>>,
    pub config: Option<ScheduleConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_picked(mut self, record: Option<Record>) -> Self {
        self.picked = record;
        self
    }

    pub fn with_next_trigger(mut self, next: Option<DateTime<FixedOffset>>) -> Self {
        self.next_trigger = next;
        self
    }

    pub fn with_config(mut self, config: ScheduleConfig) -> Self {
        self.config = Some(config);
        self
    }
}
