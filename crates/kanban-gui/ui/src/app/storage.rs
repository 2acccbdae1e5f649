use anyhow::anyhow;
use kanban_core::PersistenceSlot;
use web_sys::Storage;

/// Board slot kept under one key of
/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
  key: String
}

impl LocalStorageSlot {
  pub fn new(
    key: impl Into<String>
  ) -> Self {
    Self {
      key: key.into()
    }
  }
}

impl PersistenceSlot
  for LocalStorageSlot
{
  fn read(
    &self
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(&self.key)
      .map_err(|error| {
        anyhow!(
          "failed reading {}: \
           {error:?}",
          self.key
        )
      })
  }

  fn write(
    &mut self,
    blob: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(&self.key, blob)
      .map_err(|error| {
        anyhow!(
          "failed writing {} \
           ({} bytes): {error:?}",
          self.key,
          blob.len()
        )
      })
  }
}

fn local_storage()
-> anyhow::Result<Storage> {
  web_sys::window()
    .ok_or_else(|| {
      anyhow!("no browser window")
    })?
    .local_storage()
    .map_err(|error| {
      anyhow!(
        "local storage unavailable: \
         {error:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!(
        "local storage is disabled"
      )
    })
}
