use chrono::{Duration, TimeZone, Utc};
use kanban_core::store::{decode_board, encode_board};
use kanban_core::{
    Board, BoardController, Card, ColumnId, LoadOutcome, MemorySlot, PersistenceSlot,
    relative_label,
};

fn card(title: &str, status: &str) -> Card {
    Card {
        title: title.to_string(),
        status: status.to_string(),
    }
}

fn sample_board() -> Board {
    Board {
        todo_list: vec![
            card("Write spec", "2026-10-16T08:30:00.000Z"),
            card("Review PR", "Fri Oct 16 2026 10:00:00 GMT+0800 (China Standard Time)"),
        ],
        ongoing_list: vec![card("Ship it", "2026-10-15T23:59:59.999Z")],
        done_list: vec![card("Plan", "whenever"), card("Unicode ✓ \"quoted\"", "")],
    }
}

fn titles(board: &Board, column: ColumnId) -> Vec<String> {
    board
        .column(column)
        .iter()
        .map(|card| card.title.clone())
        .collect()
}

#[test]
fn save_then_load_round_trips() {
    let board = sample_board();
    let blob = encode_board(&board).expect("encode");

    let mut ctl = BoardController::new(MemorySlot::with_blob(blob));
    assert_eq!(ctl.load_all(), LoadOutcome::Restored { cards: 5 });
    assert_eq!(ctl.board(), &board);

    ctl.save_all().expect("save");
    let stored = ctl.slot().read().expect("read").expect("slot filled");
    assert_eq!(decode_board(&stored).expect("decode"), board);
}

#[test]
fn move_between_columns_preserves_card_count() {
    let mut ctl = BoardController::new(MemorySlot::with_blob(
        encode_board(&sample_board()).expect("encode"),
    ));
    ctl.load_all();
    let before = ctl.board().card_count();
    let moving = ctl.board().todo_list[1].clone();

    assert!(
        ctl.move_card(&moving, ColumnId::Todo, ColumnId::Done)
            .expect("move")
    );

    assert_eq!(ctl.board().card_count(), before);
    assert_eq!(titles(ctl.board(), ColumnId::Todo), vec!["Write spec"]);
    assert_eq!(
        titles(ctl.board(), ColumnId::Done),
        vec!["Review PR", "Plan", "Unicode ✓ \"quoted\""]
    );
    assert_eq!(ctl.board().done_list[0], moving);
}

#[test]
fn move_within_same_column_changes_nothing() {
    let board = sample_board();
    let mut ctl = BoardController::new(MemorySlot::with_blob(
        encode_board(&board).expect("encode"),
    ));
    ctl.load_all();
    let card = ctl.board().todo_list[1].clone();

    assert!(
        !ctl.move_card(&card, ColumnId::Todo, ColumnId::Todo)
            .expect("same-column move")
    );
    assert_eq!(ctl.board(), &board);
}

#[test]
fn drag_and_drop_moves_card_to_front_of_target() {
    let mut ctl = BoardController::new(MemorySlot::new());
    let now = Utc::now();
    ctl.add_card("a", now).expect("add a");
    ctl.add_card("b", now).expect("add b");
    let a = ctl.board().todo_list[1].clone();

    ctl.drag_start(a.clone(), ColumnId::Todo);
    assert!(ctl.drag_over(ColumnId::Ongoing));
    ctl.drag_leave(ColumnId::Ongoing);
    assert!(ctl.drag_over(ColumnId::Done));
    assert!(ctl.drop_on(ColumnId::Done));
    ctl.drag_end();

    assert!(ctl.drag().is_idle());
    assert_eq!(titles(ctl.board(), ColumnId::Todo), vec!["b"]);
    assert_eq!(ctl.board().done_list, vec![a]);
}

#[test]
fn drop_on_source_column_is_silent() {
    let mut ctl = BoardController::new(MemorySlot::new());
    ctl.add_card("a", Utc::now()).expect("add a");
    let before = ctl.board().clone();
    let a = before.todo_list[0].clone();

    ctl.drag_start(a, ColumnId::Todo);
    ctl.drag_over(ColumnId::Todo);
    assert!(!ctl.drop_on(ColumnId::Todo));
    ctl.drag_end();

    assert_eq!(ctl.board(), &before);
    assert!(ctl.drag().is_idle());
}

#[test]
fn external_drop_without_selection_is_silent() {
    let mut ctl = BoardController::new(MemorySlot::new());
    ctl.add_card("a", Utc::now()).expect("add a");
    let before = ctl.board().clone();

    assert!(!ctl.drag_over(ColumnId::Done));
    assert!(!ctl.drop_on(ColumnId::Done));
    assert_eq!(ctl.board(), &before);
}

#[test]
fn drag_end_resets_after_any_sequence() {
    let mut ctl = BoardController::new(MemorySlot::new());
    ctl.add_card("a", Utc::now()).expect("add a");
    let a = ctl.board().todo_list[0].clone();

    ctl.drag_start(a.clone(), ColumnId::Todo);
    ctl.drag_end();
    assert!(ctl.drag().is_idle());

    ctl.drag_start(a.clone(), ColumnId::Todo);
    ctl.drag_over(ColumnId::Ongoing);
    ctl.drag_end();
    assert!(ctl.drag().is_idle());

    ctl.drag_start(a, ColumnId::Todo);
    ctl.drag_over(ColumnId::Ongoing);
    ctl.drag_leave(ColumnId::Ongoing);
    ctl.drag_leave(ColumnId::Done);
    ctl.drag_end();
    assert!(ctl.drag().is_idle());
    assert_eq!(ctl.board().todo_list.len(), 1);
}

#[test]
fn new_card_label_ticks_over_at_nine_and_sixty_seconds() {
    let t0 = Utc
        .with_ymd_and_hms(2026, 10, 16, 9, 0, 0)
        .single()
        .expect("valid t0");
    let mut ctl = BoardController::new(MemorySlot::new());
    ctl.add_card("Write spec", t0).expect("add card");

    assert_eq!(ctl.board().todo_list.len(), 1);
    let card = &ctl.board().todo_list[0];
    assert_eq!(card.title, "Write spec");
    assert_eq!(card.created_at(), Some(t0));

    let label_at = |offset: Duration| relative_label(&card.status, t0 + offset);
    assert_eq!(label_at(Duration::milliseconds(8_999)), "just now");
    assert_eq!(label_at(Duration::seconds(9)), "9 seconds ago");
    assert_eq!(label_at(Duration::milliseconds(59_999)), "60 seconds ago");
    assert_eq!(label_at(Duration::seconds(60)), "1 minutes ago");
}

#[test]
fn corrupted_store_loads_as_empty_board() {
    let mut ctl = BoardController::new(MemorySlot::new());
    ctl.add_card("a", Utc::now()).expect("add a");
    ctl.save_all().expect("save");

    let saved = ctl.slot().read().expect("read").expect("slot filled");
    let truncated = &saved[..saved.len() / 2];
    assert!(decode_board(truncated).is_err());

    let mut reloaded = BoardController::new(MemorySlot::with_blob(truncated));
    assert_eq!(reloaded.load_all(), LoadOutcome::Corrupt);
    assert!(reloaded.board().is_empty());
}

#[test]
fn absent_store_loads_as_empty_board() {
    let mut ctl = BoardController::new(MemorySlot::new());
    assert_eq!(ctl.load_all(), LoadOutcome::Empty);
    assert_eq!(ctl.board(), &Board::default());
}

struct FailingSlot;

impl PersistenceSlot for FailingSlot {
    fn read(&self) -> anyhow::Result<Option<String>> {
        anyhow::bail!("storage unavailable")
    }

    fn write(&mut self, _blob: &str) -> anyhow::Result<()> {
        anyhow::bail!("quota exceeded")
    }
}

#[test]
fn storage_failures_are_recoverable() {
    let mut ctl = BoardController::new(FailingSlot);
    assert_eq!(ctl.load_all(), LoadOutcome::Corrupt);

    ctl.add_card("a", Utc::now()).expect("add a");
    let err = ctl.save_all().expect_err("write fails");
    assert!(format!("{err:#}").contains("quota exceeded"));
    assert_eq!(ctl.board().todo_list.len(), 1);
}
