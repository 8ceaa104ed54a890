//! CLI command definitions

use clap::{Parser, Subcommand};
use daylog_domain::validate_log_name;
use std::path::PathBuf;

/// CLI arguments for daylog
#[derive(Parser, Debug)]
#[command(name = "daylog")]
#[command(author, version, about = "Append timestamped lines to a daily log file")]
#[command(long_about = r#"
daylog appends `[HH:MM:SS]<message>` lines to one log file per day.

The log directory is taken from --dir, else the `Serilog` app setting,
else the `Storage` app setting. A directory that does not exist means
nothing is written. When `ForceLog` is set, a failed write is retried
once under `<file>-<uuid>` with the error text in front.

Configuration files are loaded from (in priority order):
1. DAYLOG_<SECTION>__<KEY>   Environment overrides
2. --config <path>           Explicit config file
3. ./daylog.toml             Project-level config
4. ~/.config/daylog/config.toml   Global config

Example:
  daylog write "service started"
  daylog write --dir /var/log/app --name deploy.txt "step 1" "step 2"
  daylog get Serilog
  daylog refresh --section connection_strings
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append messages to the log file
    Write {
        /// Messages to write, one line each
        #[arg(required = true, value_name = "MESSAGE")]
        messages: Vec<String>,

        /// Log directory (overrides config)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Log file name inside the log directory, without path
        /// separators (default: yyyyMMdd.txt)
        #[arg(long, value_name = "NAME", value_parser = parse_log_name)]
        name: Option<String>,

        /// Do not write anything
        #[arg(long)]
        silent: bool,
    },

    /// Print an application setting
    Get {
        /// Setting key (case-insensitive)
        key: String,
    },

    /// Reload configuration sections from their sources
    Refresh {
        /// Section to reload (default: app_settings and connection_strings)
        #[arg(long, value_name = "NAME")]
        section: Option<String>,
    },

    /// Show configuration sources and loaded settings
    ShowConfig {
        /// Print loaded sections as JSON
        #[arg(long)]
        json: bool,
    },
}

/// `--name` accepts exactly what the logger accepts.
fn parse_log_name(name: &str) -> Result<String, String> {
    validate_log_name(name)
        .map(str::to_string)
        .map_err(|e| e.to_string())
}
