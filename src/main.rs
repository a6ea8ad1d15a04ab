// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Ringmates CLI - the most decorated groups of championship teammates

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use ringmates::commands::{self, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ringmates")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "RINGMATES_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Roster table (.json or .toml)
    #[arg(long, env = "RINGMATES_ROSTER", global = true)]
    roster: Option<std::path::PathBuf>,

    /// Disable colored output (any non-empty NO_COLOR also disables it)
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the teammate graph
    Stats {
        /// How many players and pairs to list
        #[arg(long)]
        top: Option<usize>,
    },

    /// Find the highest-scoring group
    Best {
        /// Group size
        #[arg(short, long)]
        length: Option<usize>,

        /// Only groups containing this player
        #[arg(short, long)]
        player: Option<String>,

        /// List the N best groups instead of only the winner
        #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        top: Option<usize>,
    },

    /// List every group containing a player
    Groups {
        /// Player to look for
        #[arg(short, long)]
        player: Option<String>,

        /// Group size
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Score an explicit group of players
    Score {
        /// Players in the group
        #[arg(required = true)]
        players: Vec<String>,
    },

    /// Write the roster table to another format
    Convert {
        /// Output file (.json or .toml)
        output: std::path::PathBuf,
    },

    /// Show configuration
    Config {
        /// Configuration key (omit to show all)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ringmates::config::load(cli.config.as_deref())?;
    if let Some(roster) = cli.roster {
        config.roster = Some(roster);
    }

    // Initialize logging; RUST_LOG wins when set
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let session = Session {
        config,
        json: cli.json,
        color: !cli.no_color,
    };
    let defaults = &session.config;

    // Execute command
    match cli.command {
        Commands::Stats { top } => {
            commands::stats::run(&session, top.unwrap_or(defaults.top))
        }
        Commands::Best { length, player, top } => {
            let player = player.or_else(|| defaults.player.clone());
            commands::best::run(
                &session,
                length.unwrap_or(defaults.length),
                player.as_deref(),
                top,
            )
        }
        Commands::Groups { player, length } => {
            let player = player
                .or_else(|| defaults.player.clone())
                .ok_or_else(|| anyhow::anyhow!("--player is required"))?;
            commands::groups::run(&session, &player, length.unwrap_or(defaults.length))
        }
        Commands::Score { players } => {
            commands::score::run(&session, players)
        }
        Commands::Convert { output } => {
            commands::convert::run(&session, &output)
        }
        Commands::Config { key } => {
            commands::config::run(&session, key.as_deref())
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
