use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use hena::api::{CmdMessage, ConfigAction, HenaApi, MessageLevel};
use hena::config::ScheduleConfig;
use hena::error::{HenaError, Result};
use hena::model::Record;
use hena::store::fs::FileStore;
use log::debug;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "HENA_HOME";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&mut api),
        Some(Commands::Add {
            title,
            content,
            category,
        }) => handle_add(&mut api, category, title, content),
        Some(Commands::Update {
            id,
            title,
            content,
            category,
        }) => handle_update(&mut api, id, title, content, category),
        Some(Commands::Delete { id }) => handle_delete(&mut api, id),
        Some(Commands::Random) => handle_random(&mut api),
        Some(Commands::Next { at }) => handle_next(&api, at),
        Some(Commands::Fire { at }) => handle_fire(&mut api, at),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "hena", "hena")
        .ok_or_else(|| HenaError::Config("Could not determine data dir".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_api() -> Result<HenaApi<FileStore>> {
    let dir = data_dir()?;
    debug!("using data dir {}", dir.display());
    Ok(HenaApi::new(FileStore::new(dir.clone()), dir))
}

fn handle_list(api: &mut HenaApi<FileStore>) -> Result<()> {
    let result = api.load_all()?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    api: &mut HenaApi<FileStore>,
    category: String,
    title: String,
    content: String,
) -> Result<()> {
    require_text("Title", &title)?;
    require_text("Content", &content)?;

    let result = api.add_record(Record::new(category, title, content))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    api: &mut HenaApi<FileStore>,
    id: u32,
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let Some(existing) = api.find_record(id)? else {
        return Err(HenaError::Api(format!("No thought with id {}", id)));
    };

    let title = title.unwrap_or(existing.title);
    let content = content.unwrap_or(existing.content);
    let category = category.unwrap_or(existing.category);
    require_text("Title", &title)?;
    require_text("Content", &content)?;

    let result = api.update_record(Record::new(category, title, content).with_id(id))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut HenaApi<FileStore>, id: u32) -> Result<()> {
    let result = api.delete_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_random(api: &mut HenaApi<FileStore>) -> Result<()> {
    let result = api.random_record()?;
    if let Some(record) = &result.picked {
        print_record(record);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_next(api: &HenaApi<FileStore>, at: Option<DateTime<FixedOffset>>) -> Result<()> {
    let result = api.next_trigger(&at.unwrap_or_else(now))?;
    if let Some(next) = result.next_trigger {
        println!("{}", next.format(TIME_FORMAT));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fire(api: &mut HenaApi<FileStore>, at: Option<DateTime<FixedOffset>>) -> Result<()> {
    let result = api.fire(&at.unwrap_or_else(now))?;
    if let Some(record) = &result.picked {
        print_record(record);
        println!();
    }
    if let Some(next) = result.next_trigger {
        println!("{} {}", "Next reminder:".dimmed(), next.format(TIME_FORMAT));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &HenaApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HenaError::Api(format!("{} cannot be empty", field)));
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_record(record: &Record) {
    println!("{}", record.title.bold());
    println!("{}", record.category.dimmed());
    println!("--------------------------------");
    println!("{}", record.content);
}

/// Groups by category in order of first appearance.
fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No thoughts found.");
        return;
    }

    let mut categories: Vec<&str> = Vec::new();
    for record in records {
        if !categories.contains(&record.category.as_str()) {
            categories.push(&record.category);
        }
    }

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", category.bold());
        for record in records.iter().filter(|r| r.category == *category) {
            let id = format!("{:>4}. ", record.id);
            println!("{}{}", id.yellow(), record.title);
        }
    }
}

fn print_config(config: &ScheduleConfig) {
    println!("notification_enabled = {}", config.enabled);
    println!("interval_hours = {}", config.interval_hours);
    println!("active_start_hour = {}", config.active_start_hour);
    println!("active_end_hour = {}", config.active_end_hour);
}
