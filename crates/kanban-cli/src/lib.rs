pub mod cli;
pub mod commands;
pub mod config;
pub mod file_slot;

use std::ffi::OsString;
use std::io::Write;

use anyhow::{Context, bail};
use chrono::Utc;
use clap::Parser;
use kanban_core::{BoardController, LoadOutcome};
use tracing::{debug, info};

use crate::cli::Command;
use crate::file_slot::FileSlot;

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::GlobalCli::parse_from(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(verbose = cli.verbose, quiet = cli.quiet, "starting kanban CLI");

    let mut cfg = config::Config::load(cli.kanbanrc.as_deref())?;
    cfg.apply_overrides(
        cli.rc_overrides
            .into_iter()
            .map(|kv| (kv.key, kv.value)),
    );

    let board_path = config::resolve_board_path(&cfg, cli.data.as_deref())
        .context("failed to resolve board file")?;
    debug!(board = %board_path.display(), "resolved board file");

    let command = match cli.command {
        Some(command) => command,
        None => {
            let name = cfg
                .get("default.command")
                .unwrap_or_else(|| "show".to_string());
            Command::from_default_name(&name)?
        }
    };

    let mut ctl = BoardController::new(FileSlot::new(&board_path));
    if ctl.load_all() == LoadOutcome::Corrupt && command.mutates() {
        bail!(
            "stored board at {} is unreadable; fix or remove it",
            board_path.display()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&mut ctl, command, &mut out, Utc::now())?;
    out.flush()?;

    info!("done");
    Ok(())
}
