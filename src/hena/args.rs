use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hena")]
#[command(about = "Periodic reminders of short thoughts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all thoughts, grouped by category
    #[command(alias = "ls")]
    List,

    /// Add a new thought
    #[command(alias = "n")]
    Add {
        /// Short title
        title: String,

        /// The thought itself
        content: String,

        /// Category used for grouping (defaults to "Uncategorized")
        #[arg(short, long, default_value = "")]
        category: String,
    },

    /// Edit an existing thought
    #[command(alias = "e")]
    Update {
        /// Id of the thought
        id: u32,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a thought
    #[command(alias = "rm")]
    Delete {
        /// Id of the thought
        id: u32,
    },

    /// Show one thought at random
    Random,

    /// Show when the next reminder should fire
    Next {
        /// Compute from this instant instead of now (RFC 3339)
        #[arg(long)]
        at: Option<DateTime<FixedOffset>>,
    },

    /// Run one reminder cycle: show a random thought and the next trigger time
    Fire {
        /// Compute from this instant instead of now (RFC 3339)
        #[arg(long)]
        at: Option<DateTime<FixedOffset>>,
    },

    /// Show or change schedule settings
    Config {
        /// Setting name (notification_enabled, interval_hours, active_start_hour, active_end_hour)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}
