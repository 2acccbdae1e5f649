use anyhow::Context;
use tracing::debug;

use crate::board::Board;

/// Storage key the browser front-end keeps the board under.
pub const DATA_STORE_KEY: &str = "kanban-data-store";

/// A single string-valued storage location holding the whole board.
///
/// Writes overwrite whatever was there; there is no versioning.
pub trait PersistenceSlot {
    fn read(&self) -> anyhow::Result<Option<String>>;

    fn write(&mut self, blob: &str) -> anyhow::Result<()>;
}

/// In-process slot, used by tests and as a throwaway default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySlot {
    blob: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl PersistenceSlot for MemorySlot {
    fn read(&self) -> anyhow::Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> anyhow::Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

impl<S: PersistenceSlot + ?Sized> PersistenceSlot for Box<S> {
    fn read(&self) -> anyhow::Result<Option<String>> {
        (**self).read()
    }

    fn write(&mut self, blob: &str) -> anyhow::Result<()> {
        (**self).write(blob)
    }
}

#[tracing::instrument(skip(board), fields(cards = board.card_count()))]
pub fn encode_board(board: &Board) -> anyhow::Result<String> {
    let blob = serde_json::to_string(board).context("failed to serialize board")?;
    debug!(bytes = blob.len(), "encoded board");
    Ok(blob)
}

#[tracing::instrument(skip(blob), fields(bytes = blob.len()))]
pub fn decode_board(blob: &str) -> anyhow::Result<Board> {
    let board: Board = serde_json::from_str(blob).context("failed parsing stored board")?;
    debug!(cards = board.card_count(), "decoded board");
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::{MemorySlot, PersistenceSlot, decode_board, encode_board};
    use crate::board::Board;
    use crate::card::Card;

    #[test]
    fn memory_slot_overwrites() {
        let mut slot = MemorySlot::new();
        assert_eq!(slot.read().expect("read empty"), None);
        slot.write("one").expect("first write");
        slot.write("two").expect("second write");
        assert_eq!(slot.read().expect("read").as_deref(), Some("two"));
    }

    #[test]
    fn decodes_blob_written_by_browser_version() {
        let blob = r#"{"todoList":[{"title":"Write spec","status":"Fri Oct 16 2026 10:00:00 GMT+0800 (China Standard Time)"}],"ongoingList":[],"doneList":[]}"#;
        let board = decode_board(blob).expect("decode");
        assert_eq!(board.todo_list.len(), 1);
        assert_eq!(board.todo_list[0].title, "Write spec");
        assert!(board.todo_list[0].created_at().is_some());
    }

    #[test]
    fn missing_lists_decode_as_empty() {
        let board = decode_board(r#"{"doneList":[{"title":"x","status":"s"}]}"#).expect("decode");
        assert!(board.todo_list.is_empty());
        assert!(board.ongoing_list.is_empty());
        assert_eq!(board.done_list.len(), 1);
    }

    #[test]
    fn rejects_malformed_blobs() {
        assert!(decode_board("").is_err());
        assert!(decode_board("{not json").is_err());
        assert!(decode_board("42").is_err());
        assert!(decode_board("null").is_err());
        assert!(decode_board(r#"{"todoList":[{"title":1}]}"#).is_err());
    }

    #[test]
    fn encoded_blob_uses_list_keys() {
        let board = Board {
            todo_list: vec![Card {
                title: "a".to_string(),
                status: "s".to_string(),
            }],
            ..Board::default()
        };
        let blob = encode_board(&board).expect("encode");
        assert_eq!(
            blob,
            r#"{"todoList":[{"title":"a","status":"s"}],"ongoingList":[],"doneList":[]}"#
        );
    }
}
