use kanban_core::{
  Card,
  ColumnId
};
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::KanbanCard;

#[derive(Properties, PartialEq)]
pub struct KanbanColumnProps {
  pub column:         ColumnId,
  pub cards:          Vec<Card>,
  pub is_drop_target: bool,
  pub dragging:       Option<Card>,
  pub tick_ms:        u32,
  #[prop_or_default]
  pub header_action:  Html,
  #[prop_or_default]
  pub children:       Html,
  pub on_drag_start:
    Callback<(Card, ColumnId)>,
  pub on_drag_end:    Callback<()>,
  /// Answers whether this column
  /// accepts the current drag.
  pub on_drag_over:
    Callback<ColumnId, bool>,
  pub on_drag_leave:
    Callback<ColumnId>,
  pub on_drop:        Callback<ColumnId>
}

#[function_component(KanbanColumn)]
pub fn kanban_column(
  props: &KanbanColumnProps
) -> Html {
  let column = props.column;

  let accept_drag = {
    let on_drag_over =
      props.on_drag_over.clone();
    move |event: DragEvent| {
      if on_drag_over.emit(column) {
        event.prevent_default();
        if let Some(data_transfer) =
          event.data_transfer()
        {
          data_transfer
            .set_drop_effect("move");
        }
      }
    }
  };
  let ondragenter =
    Callback::from(accept_drag.clone());
  let ondragover =
    Callback::from(accept_drag);

  let ondragleave = {
    let on_drag_leave =
      props.on_drag_leave.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          data_transfer
            .set_drop_effect("none");
        }
        on_drag_leave.emit(column);
      }
    )
  };

  let ondrop = {
    let on_drop = props.on_drop.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        on_drop.emit(column);
      }
    )
  };

  let column_class =
    format!("column-{}", column.key());

  html! {
      <section class={classes!("kanban-column", column_class, props.is_drop_target.then_some("drop-hint"))} {ondragenter} {ondragover} {ondragleave} {ondrop}>
          <h2>{ column.title() }{ props.header_action.clone() }</h2>
          <ul>
              { props.children.clone() }
              {
                  for props.cards.iter().cloned().map(|card| {
                      let is_dragging = props.dragging.as_ref() == Some(&card);
                      html! {
                          <KanbanCard
                              card={card}
                              column={column}
                              is_dragging={is_dragging}
                              tick_ms={props.tick_ms}
                              on_drag_start={props.on_drag_start.clone()}
                              on_drag_end={props.on_drag_end.clone()}
                          />
                      }
                  })
              }
          </ul>
      </section>
  }
}
