use std::fmt;

/// Which panel the page shows. `LoggedOut`
/// is the auth form; the other four are
/// the mutually exclusive sidebar tabs.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum ActiveTab {
  #[default]
  LoggedOut,
  Dashboard,
  AddTask,
  Ai,
  Telegram
}

impl ActiveTab {
  pub const SIGNED_IN: [ActiveTab; 4] = [
    ActiveTab::Dashboard,
    ActiveTab::AddTask,
    ActiveTab::Ai,
    ActiveTab::Telegram
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::LoggedOut => "auth",
      | Self::Dashboard => "dashboard",
      | Self::AddTask => "add-task-section",
      | Self::Ai => "ai-section",
      | Self::Telegram => {
        "telegram-section"
      }
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::LoggedOut => "Sign in",
      | Self::Dashboard => "Tasks",
      | Self::AddTask => "Add Task",
      | Self::Ai => "AI Assistant",
      | Self::Telegram => "Telegram"
    }
  }

  pub fn is_signed_in(self) -> bool {
    self != Self::LoggedOut
  }
}

impl fmt::Display for ActiveTab {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum Theme {
  #[default]
  Light,
  Dark
}

impl Theme {
  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn shell_class(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "",
      | Self::Dark => "dark-mode"
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  pub fn from_storage(
    raw: Option<&str>
  ) -> Self {
    match raw {
      | Some("dark") => Self::Dark,
      | _ => Self::Light
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_logged_out_is_signed_out() {
    assert!(
      !ActiveTab::LoggedOut
        .is_signed_in()
    );
    for tab in ActiveTab::SIGNED_IN {
      assert!(tab.is_signed_in());
    }
  }

  #[test]
  fn theme_round_trips_through_storage_value()
  {
    for theme in
      [Theme::Light, Theme::Dark]
    {
      assert_eq!(
        Theme::from_storage(Some(
          theme.storage_value()
        )),
        theme
      );
    }
    assert_eq!(
      Theme::from_storage(None),
      Theme::Light
    );
    assert_eq!(
      Theme::Light.next(),
      Theme::Dark
    );
  }

  #[test]
  fn only_dark_theme_marks_the_shell() {
    assert_eq!(
      Theme::Dark.shell_class(),
      "dark-mode"
    );
    assert!(
      Theme::Light
        .shell_class()
        .is_empty()
    );
  }
}
