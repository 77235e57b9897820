//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sift_core::config::{self, Config};

use crate::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "Browse and filter JSON records through filter popovers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of $SIFT_HOME/config.toml
    #[arg(long, global = true, value_name = "PATH", env = "SIFT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse records interactively with filter popovers
    Browse {
        /// JSON file holding an array of objects
        file: PathBuf,

        /// Ignore filters remembered from the last session
        #[arg(long)]
        fresh: bool,
    },

    /// Print the records matching the given filters as JSON
    Filter {
        /// JSON file holding an array of objects
        file: PathBuf,

        /// Commit a filter value (repeatable); an empty value leaves the field unset
        #[arg(long = "set", value_name = "KEY=VALUE")]
        assignments: Vec<String>,

        /// Print only the number of matching records
        #[arg(long)]
        count: bool,
    },

    /// List configured filter fields and their options
    Fields,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = if matches!(cli.command, Commands::Browse { .. }) {
        LogTarget::File(config::paths::logs_dir())
    } else {
        LogTarget::Stderr
    };
    let _guard = logging::init(target);

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(config::paths::config_path);
    let load_config = || Config::load_from(&config_path).context("load config");

    match cli.command {
        Commands::Browse { file, fresh } => commands::browse::run(&load_config()?, &file, fresh),
        Commands::Filter {
            file,
            assignments,
            count,
        } => commands::filter::run(&load_config()?, &file, &assignments, count),
        Commands::Fields => {
            commands::fields::run(&load_config()?);
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
    }
}
