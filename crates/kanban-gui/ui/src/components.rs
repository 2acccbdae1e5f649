mod board_header;
mod kanban_board;
mod kanban_card;
mod kanban_column;
mod new_card_input;

pub use board_header::{
  BoardHeader,
  Notice
};
pub use kanban_board::KanbanBoard;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use new_card_input::NewCardInput;
