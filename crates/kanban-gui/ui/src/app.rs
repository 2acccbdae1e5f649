mod storage;

use chrono::Utc;
use gloo::timers::future::TimeoutFuture;
use kanban_core::{
  BoardController,
  Card,
  ColumnId,
  DATA_STORE_KEY
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_mut_ref,
  use_state
};

use self::storage::LocalStorageSlot;
use crate::components::{
  BoardHeader,
  KanbanBoard,
  Notice
};

/// Knobs for the browser board.
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
  pub storage_key:   String,
  /// Pause before applying the stored
  /// board; the loading column shows
  /// meanwhile. Zero skips it.
  pub load_delay_ms: u32,
  /// Refresh period of card "time
  /// since" labels.
  pub tick_ms:       u32
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      storage_key:   DATA_STORE_KEY
        .to_string(),
      load_delay_ms: 1_000,
      tick_ms:       1_000
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(UiConfig::default);
  let controller = {
    let key = config.storage_key.clone();
    use_mut_ref(move || {
      BoardController::new(
        LocalStorageSlot::new(key)
      )
    })
  };
  let rerender = use_force_update();
  let loading = use_state(|| true);
  let adding = use_state(|| false);
  let notice =
    use_state(|| None::<Notice>);

  {
    let controller = controller.clone();
    let loading = loading.clone();
    let delay_ms = config.load_delay_ms;
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          if delay_ms > 0 {
            TimeoutFuture::new(delay_ms)
              .await;
          }
          let outcome = controller
            .borrow_mut()
            .load_all();
          tracing::info!(
            ?outcome,
            "board ready"
          );
          loading.set(false);
        }
      );
      || ()
    });
  }

  let on_save = {
    let controller = controller.clone();
    let notice = notice.clone();
    Callback::from(move |_| {
      let result = controller
        .borrow_mut()
        .save_all();
      match result {
        | Ok(()) => {
          notice.set(Some(Notice::info(
            "Board saved"
          )));
        }
        | Err(error) => {
          tracing::error!(
            error = %format!("{error:#}"),
            "failed saving board"
          );
          notice.set(Some(
            Notice::error(format!(
              "Could not save the \
               board: {error:#}"
            ))
          ));
        }
      }
    })
  };

  let on_dismiss = {
    let notice = notice.clone();
    Callback::from(move |_| {
      notice.set(None);
    })
  };

  let on_add_open = {
    let adding = adding.clone();
    Callback::from(move |_| {
      adding.set(true);
    })
  };

  let on_add_cancel = {
    let adding = adding.clone();
    Callback::from(move |_| {
      adding.set(false);
    })
  };

  let on_add_submit = {
    let controller = controller.clone();
    let adding = adding.clone();
    let notice = notice.clone();
    Callback::from(
      move |title: String| {
        let result = controller
          .borrow_mut()
          .add_card(&title, Utc::now())
          .map(|_| ());
        match result {
          | Ok(()) => {
            notice.set(None);
            adding.set(false);
          }
          | Err(error) => {
            tracing::debug!(
              %error,
              "new card rejected"
            );
            notice.set(Some(
              Notice::error(
                error.to_string()
              )
            ));
          }
        }
      }
    )
  };

  let on_drag_start = {
    let controller = controller.clone();
    let rerender = rerender.clone();
    Callback::from(
      move |(card, column): (
        Card,
        ColumnId
      )| {
        controller
          .borrow_mut()
          .drag_start(card, column);
        rerender.force_update();
      }
    )
  };

  let on_drag_over = {
    let controller = controller.clone();
    let rerender = rerender.clone();
    Callback::from(
      move |column: ColumnId| -> bool {
        let (accepted, changed) = {
          let mut ctl =
            controller.borrow_mut();
          let before = ctl.drag().target();
          let accepted =
            ctl.drag_over(column);
          (
            accepted,
            ctl.drag().target() != before
          )
        };
        if changed {
          rerender.force_update();
        }
        accepted
      }
    )
  };

  let on_drag_leave = {
    let controller = controller.clone();
    let rerender = rerender.clone();
    Callback::from(
      move |column: ColumnId| {
        let changed = {
          let mut ctl =
            controller.borrow_mut();
          let before = ctl.drag().target();
          ctl.drag_leave(column);
          ctl.drag().target() != before
        };
        if changed {
          rerender.force_update();
        }
      }
    )
  };

  let on_drop = {
    let controller = controller.clone();
    let rerender = rerender.clone();
    Callback::from(
      move |column: ColumnId| {
        let moved = controller
          .borrow_mut()
          .drop_on(column);
        tracing::debug!(
          %column,
          moved,
          "drop handled"
        );
        rerender.force_update();
      }
    )
  };

  let on_drag_end = {
    let controller = controller.clone();
    let rerender = rerender.clone();
    Callback::from(move |_| {
      controller
        .borrow_mut()
        .drag_end();
      rerender.force_update();
    })
  };

  let (board, drag) = {
    let ctl = controller.borrow();
    (
      ctl.board().clone(),
      ctl.drag().selection()
    )
  };

  html! {
      <div class="app">
          <BoardHeader
              save_disabled={*loading}
              notice={(*notice).clone()}
              on_save={on_save}
              on_dismiss={on_dismiss}
          />
          <KanbanBoard
              board={board}
              loading={*loading}
              drag={drag}
              adding={*adding}
              tick_ms={config.tick_ms}
              on_add_open={on_add_open}
              on_add_submit={on_add_submit}
              on_add_cancel={on_add_cancel}
              on_drag_start={on_drag_start}
              on_drag_end={on_drag_end}
              on_drag_over={on_drag_over}
              on_drag_leave={on_drag_leave}
              on_drop={on_drop}
          />
      </div>
  }
}
