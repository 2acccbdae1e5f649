use std::mem;

use crate::card::Card;
use crate::column::ColumnId;

/// In-flight drag of one card.
///
/// `drop_on` and `end` are terminal: both always return the machine to `Idle`,
/// whatever happened before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        item: Card,
        source: ColumnId,
    },
    DraggingOver {
        item: Card,
        source: ColumnId,
        target: ColumnId,
    },
}

/// Flat view of the drag state, one optional field per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSelection {
    pub item: Option<Card>,
    pub source_column: Option<ColumnId>,
    pub target_column: Option<ColumnId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub card: Card,
    pub from: ColumnId,
    pub to: ColumnId,
}

impl DragState {
    pub fn start(&mut self, item: Card, source: ColumnId) {
        *self = DragState::Dragging { item, source };
    }

    /// Marks `target` as the column under the pointer.
    ///
    /// Returns `false` when nothing is being dragged, i.e. the column is not
    /// a legal drop target and the caller must keep the default drop effect.
    pub fn over(&mut self, target: ColumnId) -> bool {
        match mem::take(self) {
            DragState::Idle => false,
            DragState::Dragging { item, source } | DragState::DraggingOver { item, source, .. } => {
                *self = DragState::DraggingOver {
                    item,
                    source,
                    target,
                };
                true
            }
        }
    }

    pub fn leave(&mut self, target: ColumnId) {
        *self = match mem::take(self) {
            DragState::DraggingOver {
                item,
                source,
                target: current,
            } if current == target => DragState::Dragging { item, source },
            other => other,
        };
    }

    /// Finishes the drag on `target`.
    ///
    /// Yields a move only when a card was picked up from a different column.
    pub fn drop_on(&mut self, target: ColumnId) -> Option<MoveRequest> {
        match mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging { item, source } | DragState::DraggingOver { item, source, .. } => {
                (source != target).then_some(MoveRequest {
                    card: item,
                    from: source,
                    to: target,
                })
            }
        }
    }

    pub fn end(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn item(&self) -> Option<&Card> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { item, .. } | DragState::DraggingOver { item, .. } => Some(item),
        }
    }

    pub fn source(&self) -> Option<ColumnId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { source, .. } | DragState::DraggingOver { source, .. } => {
                Some(*source)
            }
        }
    }

    pub fn target(&self) -> Option<ColumnId> {
        match self {
            DragState::DraggingOver { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub fn selection(&self) -> DragSelection {
        DragSelection {
            item: self.item().cloned(),
            source_column: self.source(),
            target_column: self.target(),
        }
    }
}
