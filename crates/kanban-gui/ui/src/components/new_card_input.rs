use web_sys::{
  HtmlInputElement,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct NewCardInputProps {
  pub on_submit: Callback<String>,
  pub on_cancel: Callback<()>
}

/// Inline title input shown at the top
/// of the to-do column. Enter submits,
/// Escape closes it.
#[function_component(NewCardInput)]
pub fn new_card_input(
  props: &NewCardInputProps
) -> Html {
  let input_ref = use_node_ref();

  {
    let input_ref = input_ref.clone();
    use_effect_with((), move |_| {
      if let Some(input) = input_ref
        .cast::<HtmlInputElement>()
        && let Err(error) = input.focus()
      {
        tracing::debug!(
          ?error,
          "failed focusing new card \
           input"
        );
      }
      || ()
    });
  }

  let onkeydown = {
    let input_ref = input_ref.clone();
    let on_submit =
      props.on_submit.clone();
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        match event.key().as_str() {
          | "Enter" => {
            event.prevent_default();
            let title = input_ref
              .cast::<HtmlInputElement>()
              .map(|input| input.value())
              .unwrap_or_default();
            on_submit.emit(title);
          }
          | "Escape" => {
            on_cancel.emit(());
          }
          | _ => {}
        }
      }
    )
  };

  html! {
      <li class="kanban-card new-card">
          <h3>{ "Add a new card" }</h3>
          <div class="card-title">
              <input type="text" ref={input_ref} {onkeydown} />
          </div>
      </li>
  }
}
