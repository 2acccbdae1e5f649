use kanban_core::{
  Board,
  Card,
  ColumnId,
  DragSelection
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  KanbanColumn,
  NewCardInput
};

#[derive(Properties, PartialEq)]
pub struct KanbanBoardProps {
  pub board:         Board,
  pub loading:       bool,
  pub drag:          DragSelection,
  pub adding:        bool,
  pub tick_ms:       u32,
  pub on_add_open:   Callback<()>,
  pub on_add_submit: Callback<String>,
  pub on_add_cancel: Callback<()>,
  pub on_drag_start:
    Callback<(Card, ColumnId)>,
  pub on_drag_end:   Callback<()>,
  pub on_drag_over:
    Callback<ColumnId, bool>,
  pub on_drag_leave:
    Callback<ColumnId>,
  pub on_drop:       Callback<ColumnId>
}

#[function_component(KanbanBoard)]
pub fn kanban_board(
  props: &KanbanBoardProps
) -> Html {
  if props.loading {
    return html! {
        <main class="kanban-board">
            <section class="kanban-column column-loading">
                <h2>{ "Loading..." }</h2>
                <ul></ul>
            </section>
        </main>
    };
  }

  html! {
      <main class="kanban-board">
          {
              for ColumnId::ALL.into_iter().map(|column| {
                  let is_todo = column == ColumnId::Todo;
                  let header_action = if is_todo {
                      let on_add_open = props.on_add_open.clone();
                      html! {
                          <button
                              class="add-card"
                              disabled={props.adding}
                              onclick={move |_| on_add_open.emit(())}
                          >
                              { "⊕ Add a new card" }
                          </button>
                      }
                  } else {
                      html! {}
                  };
                  let new_card = if is_todo && props.adding {
                      html! {
                          <NewCardInput
                              on_submit={props.on_add_submit.clone()}
                              on_cancel={props.on_add_cancel.clone()}
                          />
                      }
                  } else {
                      html! {}
                  };

                  html! {
                      <KanbanColumn
                          column={column}
                          cards={props.board.column(column).to_vec()}
                          is_drop_target={props.drag.target_column == Some(column)}
                          dragging={props.drag.item.clone()}
                          tick_ms={props.tick_ms}
                          header_action={header_action}
                          on_drag_start={props.on_drag_start.clone()}
                          on_drag_end={props.on_drag_end.clone()}
                          on_drag_over={props.on_drag_over.clone()}
                          on_drag_leave={props.on_drag_leave.clone()}
                          on_drop={props.on_drop.clone()}
                      >
                          { new_card }
                      </KanbanColumn>
                  }
              })
          }
      </main>
  }
}
