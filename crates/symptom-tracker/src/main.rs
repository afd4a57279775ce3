//! `symtrack` - CLI for symptom-tracker
//!
//! This binary records symptom severity entries and shows the stored history
//! as a list and a line chart.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use symptom_tracker::cli::{
    prompt_entry, AddCommand, ChartCommand, Cli, Command, ConfigCommand, ListCommand,
    OutputFormat, PromptOutcome, StatusCommand,
};
use symptom_tracker::render::{chart_text, dashboard, list_plain, list_table};
use symptom_tracker::{
    init_logging, today_utc, Config, EntryForm, Level, RecordStore, Storage, Tracker,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Loaded lazily so `config` subcommands still run against a broken file
    let load_config =
        || Config::load_from(cli.config.clone()).context("loading configuration");

    // Execute the command
    match cli.command {
        Command::Add(add_cmd) => handle_add(&load_config()?, &add_cmd),
        Command::List(list_cmd) => handle_list(&load_config()?, &list_cmd),
        Command::Chart(chart_cmd) => handle_chart(&load_config()?, &chart_cmd),
        Command::Show => handle_show(&load_config()?),
        Command::Status(status_cmd) => handle_status(&load_config()?, &status_cmd),
        Command::Config(config_cmd) => handle_config(cli.config.clone(), config_cmd),
    }
}

/// Open the configured database and mount a tracker on it.
fn open_tracker(config: &Config, form: EntryForm) -> anyhow::Result<Tracker<Storage>> {
    let path = config.database_path();
    let storage = Storage::open(&path)
        .with_context(|| format!("opening record database {}", path.display()))?;
    let store = RecordStore::with_key(storage, config.storage.key.clone());
    let tracker = Tracker::mount(store, form).context("loading stored records")?;
    Ok(tracker.with_labels(config.labels()))
}

fn default_form(config: &Config) -> EntryForm {
    EntryForm::new(today_utc(), config.default_level())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut form = default_form(config);
    if let Some(date) = cmd.date {
        form.set_date(date);
    }
    if let Some(level) = cmd.level {
        form.set_level(Level::new(level)?);
    }

    let mut tracker = open_tracker(config, form)?;

    if cmd.interactive {
        let labels = tracker.labels();
        let stdin = io::stdin();
        let outcome = prompt_entry(
            tracker.form_mut(),
            labels,
            &mut stdin.lock(),
            &mut io::stdout(),
        )?;
        if outcome == PromptOutcome::Cancelled {
            tracing::info!("Interactive entry cancelled, nothing saved");
            return Ok(());
        }
    }

    let ack = tracker.save().context("saving record")?;
    println!("{}", ack.message);
    println!(
        "  {} / {}{}",
        ack.record.date_string(),
        tracker.labels().level_prefix,
        ack.record.level
    );
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let tracker = open_tracker(config, default_form(config))?;
    let view = tracker.view();

    match cmd.format {
        OutputFormat::Plain => print!("{}", list_plain(&view.list, tracker.labels())),
        OutputFormat::Table => print!("{}", list_table(&view.list, tracker.labels())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.list)?),
    }
    Ok(())
}

fn handle_chart(config: &Config, cmd: &ChartCommand) -> anyhow::Result<()> {
    let tracker = open_tracker(config, default_form(config))?;
    let view = tracker.view();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&view.chart)?);
    } else {
        let width = cmd
            .width
            .map_or(config.chart.column_width, usize::from);
        println!("{}", tracker.labels().chart_title);
        print!("{}", chart_text(&view.chart, width));
    }
    Ok(())
}

fn handle_show(config: &Config) -> anyhow::Result<()> {
    let tracker = open_tracker(config, default_form(config))?;
    print!(
        "{}",
        dashboard(&tracker.view(), tracker.labels(), config.chart.column_width)
    );
    Ok(())
}

fn handle_status(config: &Config, cmd: &StatusCommand) -> anyhow::Result<()> {
    let tracker = open_tracker(config, default_form(config))?;
    let stats = tracker.store().backend().stats()?;
    let records = tracker.records();
    let first = records.first().map(|r| r.date_string());
    let last = records.last().map(|r| r.date_string());

    if cmd.json {
        let status = serde_json::json!({
            "database_path": tracker.store().backend().path(),
            "storage_key": tracker.store().key(),
            "record_count": records.len(),
            "first_date": first,
            "last_date": last,
            "slot_count": stats.slot_count,
            "last_write": stats.last_write,
            "db_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("symtrack status");
        println!("---------------");
        println!(
            "Database:      {}",
            tracker.store().backend().path().display()
        );
        println!("Storage key:   {}", tracker.store().key());
        println!("Records:       {}", records.len());
        if let (Some(first), Some(last)) = (first, last) {
            println!("Date range:    {first} .. {last}");
        }
        println!(
            "Last write:    {}",
            stats.last_write.as_deref().unwrap_or("never")
        );
        println!("Size:          {} bytes", stats.db_size_bytes);
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path).context("loading configuration")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!("  Key:                {}", config.storage.key);
                println!();
                println!("[Form]");
                println!("  Default level:      {}", config.form.default_level);
                println!();
                println!("[Display]");
                println!("  Language:           {}", config.display.language);
                println!();
                println!("[Chart]");
                println!("  Column width:       {}", config.chart.column_width);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("validating {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
