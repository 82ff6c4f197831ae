//! # Hena Architecture
//!
//! Hena keeps a small collection of short thoughts and works out when the next
//! reminder showing one of them should fire. Delivering the reminder (arming an
//! OS alarm, showing a notification) is the host's job; hena answers "when" and
//! "what".
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, loads schedule settings       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Seeding, id assignment, read-modify-write of the store   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`trigger`] sits beside the layers: a pure function of the current time and
//! a [`config::ScheduleConfig`], called by the API's `next_trigger` and `fire`.
//!
//! ## The Reminder Cycle
//!
//! 1. The host asks for the next trigger instant and arms a one-shot wake-up.
//! 2. On wake-up it calls `fire`, which picks a random thought and returns the
//!    instant to arm next.
//! 3. After any settings change the host asks again and re-arms.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`trigger`]: Next trigger calculation
//! - [`model`]: The `Record` type
//! - [`config`]: Schedule settings and their persistence
//! - [`bundled`]: Default collection used to seed a new store
//! - [`error`]: Error types

pub mod api;
pub mod bundled;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod trigger;
