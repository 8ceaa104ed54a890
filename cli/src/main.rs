//! CLI entrypoint for daylog
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use daylog_application::FileLogger;
use daylog_domain::{DEFAULT_SECTIONS, Settings};
use daylog_infrastructure::{
    ConfigAccessor, ConfigLoader, ConfigSource, ConfigStore, DEFAULT_DIAGNOSTIC_CAPACITY,
    spawn_diagnostics, system_file_logger,
};
use daylog_presentation::{Cli, Command, ConsoleFormatter};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = if cli.no_config {
        ConfigSource::defaults_only()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigSource::discover(cli.config.clone())
    };

    // === Dependency Injection ===
    // The store is owned here; the diagnostics logger reads it silently so
    // its own lookups cannot feed back into the queue.
    let store = Arc::new(ConfigStore::open(source)?);
    info!("Configuration loaded");

    let (diagnostics, worker) = spawn_diagnostics(store.clone(), DEFAULT_DIAGNOSTIC_CAPACITY);
    let accessor = ConfigAccessor::new(store, diagnostics);

    let result = run(cli.command, accessor).await;

    // All senders are gone once `run` returns; wait for queued diagnostics.
    if let Some(worker) = worker
        && let Err(e) = worker.await
    {
        debug!("Diagnostics worker ended abnormally: {}", e);
    }

    result
}

async fn run(command: Command, accessor: ConfigAccessor) -> Result<()> {
    match command {
        Command::Write {
            messages,
            dir,
            name,
            silent,
        } => {
            let mut settings = ConfigLoader::load(accessor.store().source())?
                .logger
                .to_settings();
            if dir.is_some() {
                settings.log_path = dir;
            }
            if name.is_some() {
                settings.log_name = name;
            }
            settings.silent_mode |= silent;

            let logger: FileLogger =
                system_file_logger(Arc::new(accessor.clone())).with_settings(settings);

            // Lines from one invocation are not ordered relative to each other.
            join_all(messages.iter().map(|message| logger.write(message))).await;

            println!(
                "{}",
                ConsoleFormatter::format_write_result(
                    messages.len(),
                    logger.settings().silent_mode,
                    logger.last_write_path().as_deref(),
                )
            );
        }

        Command::Get { key } => {
            let value = accessor.get(&key);
            println!("{}", ConsoleFormatter::format_value(&key, value.as_deref()));
        }

        Command::Refresh { section } => {
            accessor.refresh(section.as_deref())?;
            let refreshed: Vec<&str> = match section.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => vec![name],
                _ => DEFAULT_SECTIONS.to_vec(),
            };
            println!("{}", ConsoleFormatter::format_refreshed(&refreshed));
        }

        Command::ShowConfig { json } => {
            let store = accessor.store();
            let mut sections: Vec<(String, Settings)> = Vec::new();
            for name in store.section_names()? {
                let settings = store.section(&name)?.unwrap_or_default();
                sections.push((name, settings));
            }

            if json {
                println!("{}", ConsoleFormatter::format_sections_json(&sections));
            } else {
                ConfigLoader::print_config_sources(store.source());
                println!();
                print!("{}", ConsoleFormatter::format_sections(&sections));
                println!();
                print!("{}", ConsoleFormatter::format_known_keys());
            }
        }
    }

    Ok(())
}
