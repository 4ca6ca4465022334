use taskdeck_core::Theme;

const THEME_STORAGE_KEY: &str =
  "taskdeck.theme";

fn local_storage() -> Option<web_sys::Storage>
{
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

pub(super) fn load_theme() -> Theme {
  let stored =
    local_storage().and_then(|storage| {
      storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
    });

  Theme::from_storage(stored.as_deref())
}

pub(super) fn save_theme(theme: Theme) {
  if let Some(storage) = local_storage()
    && let Err(error) = storage.set_item(
      THEME_STORAGE_KEY,
      theme.storage_value()
    )
  {
    tracing::warn!(
      ?error,
      "failed to persist theme"
    );
  }
}
