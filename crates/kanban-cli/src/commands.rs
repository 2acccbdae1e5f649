use std::io::Write;

use anyhow::{Context, anyhow};
use chrono::{DateTime, Utc};
use kanban_core::{Board, BoardController, ColumnId, PersistenceSlot, relative_label};
use tracing::info;

use crate::cli::Command;

#[tracing::instrument(skip(ctl, out, now))]
pub fn dispatch<S, W>(
    ctl: &mut BoardController<S>,
    command: Command,
    out: &mut W,
    now: DateTime<Utc>,
) -> anyhow::Result<()>
where
    S: PersistenceSlot,
    W: Write,
{
    match command {
        Command::Show => {
            write!(out, "{}", render_board(ctl.board(), now))?;
        }
        Command::Add { title } => {
            let title = title.join(" ");
            let added = ctl.add_card(&title, now)?.title.clone();
            ctl.save_all()?;
            writeln!(out, "added \"{added}\" to {}", ColumnId::Todo)?;
        }
        Command::Move { title, from, to } => {
            move_by_title(ctl, &title, from, to, out)?;
        }
        Command::Export => {
            if let Some(blob) = ctl.slot().read().context("failed to read stored board")? {
                writeln!(out, "{blob}")?;
            }
        }
    }
    Ok(())
}

/// Replays a drag of `title` from `from` onto `to` and saves when the board
/// changed.
fn move_by_title<S, W>(
    ctl: &mut BoardController<S>,
    title: &str,
    from: ColumnId,
    to: ColumnId,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: PersistenceSlot,
    W: Write,
{
    let card = ctl
        .board()
        .column(from)
        .iter()
        .find(|card| card.title == title)
        .cloned()
        .ok_or_else(|| anyhow!("no card titled \"{title}\" in {from}"))?;

    ctl.drag_start(card, from);
    ctl.drag_over(to);
    let moved = ctl.drop_on(to);
    ctl.drag_end();

    if moved {
        ctl.save_all()?;
        info!(title, %from, %to, "move saved");
        writeln!(out, "moved \"{title}\": {from} -> {to}")?;
    } else {
        writeln!(out, "\"{title}\" is already in {to}")?;
    }
    Ok(())
}

pub fn render_board(board: &Board, now: DateTime<Utc>) -> String {
    let mut text = String::new();
    for (idx, (column, cards)) in board.columns().enumerate() {
        if idx > 0 {
            text.push('\n');
        }
        text.push_str(&format!("{} ({})\n", column.title(), cards.len()));
        if cards.is_empty() {
            text.push_str("  (empty)\n");
        }
        for card in cards {
            text.push_str(&format!(
                "  {} · {}\n",
                card.title,
                relative_label(&card.status, now)
            ));
        }
    }
    text
}
