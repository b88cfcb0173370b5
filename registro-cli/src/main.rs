//! Registro CLI
//!
//! Command-line interface over the Registro identity resolution engine.
//! Known profiles are read from a JSON file standing in for the database.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use registro_core::{SearchPattern, Sex};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "registro")]
#[command(version, about = "Identity matching and merging for person records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file holding the known profiles
    #[arg(long, global = true, env = "REGISTRO_PEOPLE")]
    people: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank known profiles by similarity to a partial identity
    Similar {
        /// Last name (or part of it)
        #[arg(long)]
        last_name: Option<String>,

        /// First name (or part of it)
        #[arg(long)]
        first_name: Option<String>,

        /// Sex (woman, man)
        #[arg(long)]
        sex: Option<Sex>,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<NaiveDate>,

        /// Email (or part of it)
        #[arg(long)]
        email: Option<String>,

        /// Show scores as percentages of the maximum
        #[arg(long)]
        percent: bool,
    },

    /// Find a known profile identical to an identity file
    Match {
        /// Incoming identity (JSON)
        incoming: PathBuf,
    },

    /// Merge an incoming identity file into an existing one
    Merge {
        /// Incoming identity (JSON), wins on conflicts
        incoming: PathBuf,

        /// Existing identity (JSON)
        existing: PathBuf,
    },

    /// Attach an incoming identity to a known profile, or ask for creation
    Resolve {
        /// Incoming identity (JSON)
        incoming: PathBuf,
    },

    /// Filter known profiles by name
    Filter {
        /// Words to look for in "LAST First" (empty matches everything)
        #[arg(default_value = "")]
        pattern: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig {
        people_path: cli.people,
        json: cli.json,
    };

    match cli.command {
        Commands::Similar {
            last_name,
            first_name,
            sex,
            birth_date,
            email,
            percent,
        } => {
            let pattern = SearchPattern {
                last_name: last_name.unwrap_or_default(),
                first_name: first_name.unwrap_or_default(),
                sex: sex.unwrap_or_default(),
                birth_date,
                email: email.unwrap_or_default(),
            };
            commands::search::similar(&config, &pattern, percent)?;
        }
        Commands::Match { incoming } => commands::reconcile::exact(&config, &incoming)?,
        Commands::Merge { incoming, existing } => {
            commands::reconcile::merge_files(&config, &incoming, &existing)?;
        }
        Commands::Resolve { incoming } => commands::reconcile::resolve_file(&config, &incoming)?,
        Commands::Filter { pattern } => commands::search::filter(&config, &pattern)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "registro", &mut io::stdout());
        }
    }

    Ok(())
}
