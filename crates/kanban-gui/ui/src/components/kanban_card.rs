use chrono::Utc;
use gloo::timers::callback::Interval;
use kanban_core::{
  Card,
  ColumnId,
  relative_label
};
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct KanbanCardProps {
  pub card:          Card,
  pub column:        ColumnId,
  pub is_dragging:   bool,
  pub tick_ms:       u32,
  pub on_drag_start:
    Callback<(Card, ColumnId)>,
  pub on_drag_end:   Callback<()>
}

#[function_component(KanbanCard)]
pub fn kanban_card(
  props: &KanbanCardProps
) -> Html {
  let label = {
    let status =
      props.card.status.clone();
    use_state(move || {
      relative_label(
        &status,
        Utc::now()
      )
    })
  };

  // The interval lives as long as the
  // card is mounted with this status.
  {
    let label = label.clone();
    let tick_ms = props.tick_ms;
    use_effect_with(
      props.card.status.clone(),
      move |status| {
        let status = status.clone();
        label.set(relative_label(
          &status,
          Utc::now()
        ));
        let interval = Interval::new(
          tick_ms,
          move || {
            label.set(relative_label(
              &status,
              Utc::now()
            ));
          }
        );
        move || drop(interval)
      }
    );
  }

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    let card = props.card.clone();
    let column = props.column;
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          data_transfer
            .set_effect_allowed("move");
          if let Err(error) =
            data_transfer.set_data(
              "text/plain",
              &card.title
            )
          {
            tracing::warn!(
              ?error,
              "failed setting drag data"
            );
          }
        }
        on_drag_start
          .emit((card.clone(), column));
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(
      move |_: DragEvent| {
        on_drag_end.emit(());
      }
    )
  };

  html! {
      <li class={classes!("kanban-card", props.is_dragging.then_some("dragging"))} draggable="true" {ondragstart} {ondragend}>
          <div class="card-title">{ &props.card.title }</div>
          <div class="card-status" title={props.card.status.clone()}>{ (*label).clone() }</div>
      </li>
  }
}
