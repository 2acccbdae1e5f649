use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::card::Card;
use crate::column::ColumnId;
use crate::drag::DragState;
use crate::store::{PersistenceSlot, decode_board, encode_board};

/// What `load_all` found in the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored { cards: usize },
    Empty,
    Corrupt,
}

/// Owns the board, the in-flight drag and the persistence slot.
///
/// Every mutation is a single synchronous call, so a caller that snapshots
/// `board()` between calls always sees a consistent board.
#[derive(Debug)]
pub struct BoardController<S> {
    board: Board,
    drag: DragState,
    slot: S,
}

impl<S: PersistenceSlot> BoardController<S> {
    pub fn new(slot: S) -> Self {
        Self {
            board: Board::default(),
            drag: DragState::default(),
            slot,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Prepends a new card to the to-do column.
    ///
    /// Titles are trimmed, must be non-empty and must not already be on the
    /// board: the title is the card's display key in every column.
    #[tracing::instrument(skip(self, now))]
    pub fn add_card(&mut self, title: &str, now: DateTime<Utc>) -> anyhow::Result<&Card> {
        let title = title.trim();
        if title.is_empty() {
            bail!("card title cannot be empty");
        }
        if let Some((column, _)) = self.board.locate(title) {
            bail!("a card titled \"{title}\" already exists in {column}");
        }

        let todo = self.board.column_mut(ColumnId::Todo);
        todo.insert(0, Card::new(title.to_string(), now));
        info!(title, todo = todo.len(), "added card");
        Ok(&todo[0])
    }

    /// Moves one occurrence of `card` from `from` to the front of `to`.
    ///
    /// Returns `Ok(false)` without touching the board when `from == to`.
    #[tracing::instrument(skip(self, card), fields(title = %card.title))]
    pub fn move_card(&mut self, card: &Card, from: ColumnId, to: ColumnId) -> anyhow::Result<bool> {
        if from == to {
            debug!(column = %from, "move onto the same column ignored");
            return Ok(false);
        }

        let source = self.board.column_mut(from);
        let Some(idx) = source.iter().position(|candidate| candidate == card) else {
            bail!("card \"{}\" is not in {from}", card.title);
        };
        let moved = source.remove(idx);
        self.board.column_mut(to).insert(0, moved);

        info!(%from, %to, "moved card");
        Ok(true)
    }

    pub fn drag_start(&mut self, card: Card, source: ColumnId) {
        debug!(title = %card.title, %source, "drag start");
        self.drag.start(card, source);
    }

    /// Returns whether `target` accepts the current drag.
    pub fn drag_over(&mut self, target: ColumnId) -> bool {
        let changed = self.drag.target() != Some(target);
        let accepted = self.drag.over(target);
        if accepted && changed {
            debug!(%target, "drag over");
        }
        accepted
    }

    pub fn drag_leave(&mut self, target: ColumnId) {
        self.drag.leave(target);
    }

    /// Completes the drag on `target`, returning whether the board changed.
    ///
    /// Drops with no selection, onto the source column, or of a card that
    /// has since left its source column are all no-ops.
    #[tracing::instrument(skip(self))]
    pub fn drop_on(&mut self, target: ColumnId) -> bool {
        let Some(request) = self.drag.drop_on(target) else {
            debug!("drop ignored");
            return false;
        };

        match self.move_card(&request.card, request.from, request.to) {
            Ok(moved) => moved,
            Err(err) => {
                warn!(error = %err, "stale drag selection, drop ignored");
                false
            }
        }
    }

    pub fn drag_end(&mut self) {
        if !self.drag.is_idle() {
            debug!("drag end");
        }
        self.drag.end();
    }

    /// Writes the whole board to the slot, replacing any previous value.
    #[tracing::instrument(skip(self), fields(cards = self.board.card_count()))]
    pub fn save_all(&mut self) -> anyhow::Result<()> {
        let blob = encode_board(&self.board)?;
        self.slot
            .write(&blob)
            .context("failed to write board to storage")?;
        info!(bytes = blob.len(), "saved board");
        Ok(())
    }

    /// Replaces the board with what the slot holds.
    ///
    /// An absent, unreadable or malformed slot leaves three empty columns.
    #[tracing::instrument(skip(self))]
    pub fn load_all(&mut self) -> LoadOutcome {
        self.drag.end();

        let blob = match self.slot.read() {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                info!("no stored board, starting empty");
                self.board = Board::default();
                return LoadOutcome::Empty;
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "failed reading stored board, starting empty");
                self.board = Board::default();
                return LoadOutcome::Corrupt;
            }
        };

        match decode_board(&blob) {
            Ok(board) => {
                let cards = board.card_count();
                info!(cards, "restored board");
                self.board = board;
                LoadOutcome::Restored { cards }
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "stored board is malformed, starting empty");
                self.board = Board::default();
                LoadOutcome::Corrupt
            }
        }
    }
}
