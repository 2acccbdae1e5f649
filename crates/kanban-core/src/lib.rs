//! Board model and behaviour shared by the terminal and browser front-ends.
//!
//! Everything in here is free of file-system, terminal and DOM access so the
//! same crate compiles natively and for `wasm32-unknown-unknown`.

pub mod board;
pub mod card;
pub mod column;
pub mod controller;
pub mod drag;
pub mod reltime;
pub mod store;

pub use board::Board;
pub use card::Card;
pub use column::ColumnId;
pub use controller::{BoardController, LoadOutcome};
pub use drag::{DragSelection, DragState, MoveRequest};
pub use reltime::{RelativeTime, relative_label};
pub use store::{DATA_STORE_KEY, MemorySlot, PersistenceSlot};
