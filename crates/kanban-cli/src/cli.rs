use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use kanban_core::ColumnId;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct KeyVal {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for KeyVal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (k, v) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, got: {s}"))?;
        Ok(Self {
            key: k.trim().to_string(),
            value: v.trim().to_string(),
        })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "kanban",
    version,
    about = "Three-column kanban board (todo, ongoing, done)",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[arg(
        long = "rc",
        value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<KeyVal>()),
        action = ArgAction::Append,
        global = true
    )]
    pub rc_overrides: Vec<KeyVal>,

    #[arg(long = "kanbanrc", global = true)]
    pub kanbanrc: Option<PathBuf>,

    /// Board file, overrides `data.location`.
    #[arg(long = "data", global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the three columns.
    Show,

    /// Add a card to the top of the to-do column and save.
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Drag a card from one column and drop it on another, then save.
    Move {
        title: String,

        #[arg(value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<ColumnId>()))]
        from: ColumnId,

        #[arg(value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<ColumnId>()))]
        to: ColumnId,
    },

    /// Print the stored board blob as-is.
    Export,
}

impl Command {
    /// Whether the command saves the board afterwards.
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::Move { .. })
    }

    /// Maps a `default.command` config value to a command.
    pub fn from_default_name(name: &str) -> anyhow::Result<Self> {
        match name.trim() {
            "show" => Ok(Command::Show),
            "export" => Ok(Command::Export),
            other => Err(anyhow!(
                "default.command must be show or export, got: {other}"
            )),
        }
    }
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
