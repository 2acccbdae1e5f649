use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::column::ColumnId;

/// The three columns; this is the unit that gets persisted.
///
/// Serializes as `{"todoList": [...], "ongoingList": [...], "doneList": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(default)]
    pub todo_list: Vec<Card>,

    #[serde(default)]
    pub ongoing_list: Vec<Card>,

    #[serde(default)]
    pub done_list: Vec<Card>,
}

impl Board {
    pub fn column(&self, id: ColumnId) -> &[Card] {
        match id {
            ColumnId::Todo => &self.todo_list,
            ColumnId::Ongoing => &self.ongoing_list,
            ColumnId::Done => &self.done_list,
        }
    }

    pub fn column_mut(&mut self, id: ColumnId) -> &mut Vec<Card> {
        match id {
            ColumnId::Todo => &mut self.todo_list,
            ColumnId::Ongoing => &mut self.ongoing_list,
            ColumnId::Done => &mut self.done_list,
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = (ColumnId, &[Card])> {
        ColumnId::ALL.into_iter().map(|id| (id, self.column(id)))
    }

    pub fn card_count(&self) -> usize {
        self.todo_list.len() + self.ongoing_list.len() + self.done_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    /// First card with `title`, scanning columns in board order.
    pub fn locate(&self, title: &str) -> Option<(ColumnId, &Card)> {
        self.columns().find_map(|(id, cards)| {
            cards
                .iter()
                .find(|card| card.title == title)
                .map(|card| (id, card))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::card::Card;
    use crate::column::ColumnId;

    fn card(title: &str) -> Card {
        Card {
            title: title.to_string(),
            status: "2026-10-16T08:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn serializes_with_list_field_names() {
        let board = Board {
            todo_list: vec![card("a")],
            ongoing_list: vec![],
            done_list: vec![card("b")],
        };
        let value = serde_json::to_value(&board).expect("serialize board");
        assert_eq!(value["todoList"][0]["title"], "a");
        assert_eq!(value["doneList"][0]["status"], "2026-10-16T08:30:00.000Z");
        assert!(value["ongoingList"].as_array().is_some_and(|list| list.is_empty()));
    }

    #[test]
    fn locate_reports_owning_column() {
        let board = Board {
            todo_list: vec![card("a")],
            ongoing_list: vec![card("b")],
            done_list: vec![],
        };
        let (column, found) = board.locate("b").expect("b is on the board");
        assert_eq!(column, ColumnId::Ongoing);
        assert_eq!(found.title, "b");
        assert!(board.locate("c").is_none());
        assert_eq!(board.card_count(), 2);
    }
}
