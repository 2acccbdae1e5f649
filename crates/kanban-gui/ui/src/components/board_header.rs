use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
  Info,
  Error
}

/// One-line message under the header;
/// replaced by the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
  pub kind: NoticeKind,
  pub text: String
}

impl Notice {
  pub fn info(
    text: impl Into<String>
  ) -> Self {
    Self {
      kind: NoticeKind::Info,
      text: text.into()
    }
  }

  pub fn error(
    text: impl Into<String>
  ) -> Self {
    Self {
      kind: NoticeKind::Error,
      text: text.into()
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct BoardHeaderProps {
  pub save_disabled: bool,
  pub notice:        Option<Notice>,
  pub on_save:       Callback<()>,
  pub on_dismiss:    Callback<()>
}

#[function_component(BoardHeader)]
pub fn board_header(
  props: &BoardHeaderProps
) -> Html {
  let on_save = props.on_save.clone();
  let on_dismiss =
    props.on_dismiss.clone();

  html! {
      <>
          <header class="app-header">
              <h1>{ "Kanban" }</h1>
              <button
                  class="btn-primary"
                  disabled={props.save_disabled}
                  onclick={move |_| on_save.emit(())}
              >
                  { "Save all cards" }
              </button>
          </header>
          {
              match &props.notice {
                  | Some(notice) => {
                      let class = classes!(
                          "notice",
                          (notice.kind == NoticeKind::Error).then_some("error")
                      );
                      html! {
                          <div {class}>
                              <span>{ &notice.text }</span>
                              <button class="notice-dismiss" onclick={move |_| on_dismiss.emit(())}>{ "×" }</button>
                          </div>
                      }
                  }
                  | None => html! {}
              }
          }
      </>
  }
}
