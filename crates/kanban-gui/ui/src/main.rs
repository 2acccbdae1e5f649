mod app;
mod components;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let Some(mount) = gloo::utils::document()
    .get_element_by_id("app")
  else {
    tracing::error!(
      "no #app element to mount the \
       board on"
    );
    return;
  };

  tracing::info!("mounting kanban board");
  yew::Renderer::<app::App>::with_root(
    mount
  )
  .render();
}
