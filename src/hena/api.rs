//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! hena operation, whatever the client.
//!
//! The facade dispatches to `commands/*`, loads the schedule settings the
//! trigger commands need, and supplies the process random source. It does no
//! business logic and no printing.
//!
//! `HenaApi<S: DataStore>` is generic over the storage backend:
//! - Production: `HenaApi<FileStore>`
//! - Testing: `HenaApi<InMemoryStore>`
//!
//! The facade is built once and owns its store, so the store is never
//! re-opened between operations. Nothing here serializes concurrent callers;
//! a host with several writers must do that itself.

use crate::commands;
use crate::config::ScheduleConfig;
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};
use std::path::PathBuf;

pub struct HenaApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> HenaApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn load_all(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn update_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, record)
    }

    pub fn delete_record(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn random_record(&mut self) -> Result<commands::CmdResult> {
        commands::random::run(&mut self.store, &mut rand::rng())
    }

    pub fn save_all(&mut self, records: Vec<Record>) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, records)
    }

    pub fn find_record(&mut self, id: u32) -> Result<Option<Record>> {
        let records = self.load_all()?.records;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    pub fn next_trigger<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<commands::CmdResult> {
        let config = self.schedule_config()?;
        Ok(commands::next::run(&config, now))
    }

    pub fn fire<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<commands::CmdResult> {
        let config = self.schedule_config()?;
        commands::fire::run(&mut self.store, &config, now, &mut rand::rng())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn schedule_config(&self) -> Result<ScheduleConfig> {
        ScheduleConfig::load(&self.config_dir)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
