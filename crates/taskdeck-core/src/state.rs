use taskdeck_shared::{
  Credentials,
  TaskDto,
  TaskId,
  TaskStatus,
  TasksListArgs
};
use tracing::debug;

use crate::forms::TaskDraft;
use crate::render::Layout;
use crate::view::{
  ActiveTab,
  Theme
};

pub const REGISTERED_MESSAGE: &str =
  "Registration successful! You can now log in.";
pub const LIST_FAILED_MESSAGE: &str =
  "Could not load tasks.";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum NoticeKind {
  Success,
  Error
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub kind: NoticeKind,
  pub text: String
}

impl Notice {
  pub fn success(
    text: impl Into<String>
  ) -> Self {
    Self {
      kind: NoticeKind::Success,
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

  pub fn class(&self) -> &'static str {
    match self.kind {
      | NoticeKind::Success => {
        "success-message"
      }
      | NoticeKind::Error => {
        "error-message"
      }
    }
  }
}

/// A keystroke-level change to one of
/// the page's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
  Username(String),
  Password(String),
  TaskTitle(String),
  TaskDescription(String),
  TaskDueDate(String),
  TaskCategory(String),
  TaskEstimate(String),
  AiPrompt(String),
  TelegramChatId(String)
}

/// Everything that can change the page.
/// Produced by user input directly or by
/// `actions::perform` once a response is
/// in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
  SessionProbed {
    username: Option<String>
  },
  LoggedIn {
    username: Option<String>
  },
  LoginFailed(String),
  Registered,
  RegisterFailed(String),
  LoggedOut,
  TabSelected(ActiveTab),
  FilterApplied(TasksListArgs),
  TasksLoaded(Vec<TaskDto>),
  TasksFailed,
  TaskCreated,
  TaskRejected(String),
  RecommendationShown(String),
  ThemeSet(Theme),
  ThemeToggled,
  Edited(FieldEdit)
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub struct DashboardState {
  pub tab:              ActiveTab,
  pub username:         Option<String>,
  pub theme:            Theme,
  pub auth_form:        Credentials,
  pub auth_notice:      Option<Notice>,
  pub tasks:            Vec<TaskDto>,
  pub list_error:       Option<String>,
  pub filter:           TasksListArgs,
  pub task_draft:       TaskDraft,
  pub task_error:       Option<String>,
  pub ai_prompt:        String,
  pub ai_result:        Option<String>,
  pub telegram_chat_id: String
}

impl DashboardState {
  pub fn with_theme(theme: Theme) -> Self {
    Self {
      theme,
      ..Self::default()
    }
  }

  pub fn layout(&self) -> Layout {
    Layout::for_tab(self.tab)
  }

  pub fn is_signed_in(&self) -> bool {
    self.tab.is_signed_in()
  }

  pub fn task_status(
    &self,
    id: &TaskId
  ) -> Option<TaskStatus> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
      .map(|task| task.status)
  }

  pub fn apply(&mut self, msg: Msg) {
    match msg {
      | Msg::SessionProbed {
        username: Some(username)
      } => {
        self.username = Some(username);
        self.tab = ActiveTab::Dashboard;
      }
      | Msg::SessionProbed {
        username: None
      } => self.sign_out(),
      | Msg::LoggedIn {
        username
      } => {
        if username.is_some() {
          self.username = username;
        } else if !self
          .auth_form
          .username
          .is_empty()
        {
          self.username = Some(
            self.auth_form.username.clone()
          );
        }
        self.tab = ActiveTab::Dashboard;
      }
      | Msg::LoginFailed(text)
      | Msg::RegisterFailed(text) => {
        self.auth_notice =
          Some(Notice::error(text));
      }
      | Msg::Registered => {
        self.auth_notice = Some(
          Notice::success(
            REGISTERED_MESSAGE
          )
        );
        self.auth_form =
          Credentials::default();
      }
      | Msg::LoggedOut => self.sign_out(),
      | Msg::TabSelected(tab) => {
        // Tabs live behind the sidebar,
        // which only exists signed in.
        if self.is_signed_in()
          && tab.is_signed_in()
        {
          self.tab = tab;
        }
      }
      | Msg::FilterApplied(filter) => {
        self.filter = filter;
      }
      | Msg::TasksLoaded(tasks) => {
        self.tasks = tasks;
        self.list_error = None;
      }
      | Msg::TasksFailed => {
        self.tasks.clear();
        self.list_error = Some(
          LIST_FAILED_MESSAGE.to_string()
        );
      }
      | Msg::TaskCreated => {
        self.task_draft =
          TaskDraft::default();
        self.task_error = None;
      }
      | Msg::TaskRejected(text) => {
        self.task_error = Some(text);
      }
      | Msg::RecommendationShown(text) => {
        self.ai_result = Some(text);
      }
      | Msg::ThemeSet(theme) => {
        self.theme = theme;
      }
      | Msg::ThemeToggled => {
        self.theme = self.theme.next();
      }
      | Msg::Edited(edit) => {
        self.edit(edit)
      }
    }
    debug!(tab = %self.tab, tasks = self.tasks.len(), "applied dashboard message");
  }

  fn edit(&mut self, edit: FieldEdit) {
    match edit {
      | FieldEdit::Username(value) => {
        self.auth_form.username = value
      }
      | FieldEdit::Password(value) => {
        self.auth_form.password = value
      }
      | FieldEdit::TaskTitle(value) => {
        self.task_draft.title = value
      }
      | FieldEdit::TaskDescription(
        value
      ) => {
        self.task_draft.description = value
      }
      | FieldEdit::TaskDueDate(value) => {
        self.task_draft.due_date = value
      }
      | FieldEdit::TaskCategory(value) => {
        self.task_draft.category = value
      }
      | FieldEdit::TaskEstimate(value) => {
        self.task_draft.estimated_time =
          value
      }
      | FieldEdit::AiPrompt(value) => {
        self.ai_prompt = value
      }
      | FieldEdit::TelegramChatId(
        value
      ) => self.telegram_chat_id = value
    }
  }

  /// Leaves nothing of the previous
  /// account behind for the next one to
  /// sign in on this page.
  fn sign_out(&mut self) {
    self.tab = ActiveTab::LoggedOut;
    self.username = None;
    self.auth_notice = None;
    self.filter = TasksListArgs::default();
    self.tasks.clear();
    self.list_error = None;
    self.ai_result = None;
    self.task_error = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn signed_in() -> DashboardState {
    let mut state =
      DashboardState::default();
    state.apply(Msg::SessionProbed {
      username: Some("alice".to_string())
    });
    state
  }

  fn sample_task() -> TaskDto {
    TaskDto {
      id:             TaskId::new("t1"),
      title:          "Pay rent"
        .to_string(),
      description:    String::new(),
      due_date:       "2024-05-01"
        .to_string(),
      category:       None,
      status:         TaskStatus::Open,
      created_at:     None,
      estimated_time: None
    }
  }

  #[test]
  fn fresh_state_shows_auth_form() {
    let state = DashboardState::default();
    assert_eq!(
      state.tab,
      ActiveTab::LoggedOut
    );
    assert!(state.layout().auth);
  }

  #[test]
  fn probe_with_username_opens_dashboard()
  {
    let state = signed_in();
    assert_eq!(
      state.tab,
      ActiveTab::Dashboard
    );
    assert_eq!(
      state.username.as_deref(),
      Some("alice")
    );
    assert!(!state.layout().auth);
  }

  #[test]
  fn tab_switch_is_ignored_while_logged_out()
  {
    let mut state =
      DashboardState::default();
    state.apply(Msg::TabSelected(
      ActiveTab::Ai
    ));
    assert_eq!(
      state.tab,
      ActiveTab::LoggedOut
    );

    let mut state = signed_in();
    state.apply(Msg::TabSelected(
      ActiveTab::LoggedOut
    ));
    assert_eq!(
      state.tab,
      ActiveTab::Dashboard
    );
    state.apply(Msg::TabSelected(
      ActiveTab::Telegram
    ));
    assert_eq!(
      state.tab,
      ActiveTab::Telegram
    );
  }

  #[test]
  fn register_success_clears_auth_form() {
    let mut state =
      DashboardState::default();
    state.apply(Msg::Edited(
      FieldEdit::Username(
        "bob".to_string()
      )
    ));
    state.apply(Msg::Edited(
      FieldEdit::Password(
        "hunter2".to_string()
      )
    ));
    state.apply(Msg::Registered);

    assert_eq!(
      state.auth_form,
      Credentials::default()
    );
    assert_eq!(
      state.auth_notice,
      Some(Notice::success(
        REGISTERED_MESSAGE
      ))
    );
    assert_eq!(
      state.tab,
      ActiveTab::LoggedOut
    );
  }

  #[test]
  fn login_without_echo_keeps_typed_username()
  {
    let mut state =
      DashboardState::default();
    state.apply(Msg::Edited(
      FieldEdit::Username(
        "carol".to_string()
      )
    ));
    state.apply(Msg::LoggedIn {
      username: None
    });
    assert_eq!(
      state.username.as_deref(),
      Some("carol")
    );
    assert_eq!(
      state.tab,
      ActiveTab::Dashboard
    );
  }

  #[test]
  fn logout_drops_fetched_tasks() {
    let mut state = signed_in();
    state.apply(Msg::TasksLoaded(vec![
      sample_task(),
    ]));
    assert_eq!(
      state.task_status(&TaskId::new(
        "t1"
      )),
      Some(TaskStatus::Open)
    );

    state.apply(Msg::LoggedOut);
    assert!(state.tasks.is_empty());
    assert_eq!(state.username, None);
    assert!(state.layout().auth);
  }

  #[test]
  fn logout_resets_filter_and_auth_notice()
  {
    let mut state =
      DashboardState::default();
    state.apply(Msg::LoginFailed(
      "Invalid credentials".to_string()
    ));
    state.apply(Msg::SessionProbed {
      username: Some("alice".to_string())
    });
    state.apply(Msg::FilterApplied(
      TasksListArgs {
        status:   Some(TaskStatus::Done),
        category: Some("work".to_string())
      }
    ));

    state.apply(Msg::LoggedOut);
    assert_eq!(
      state.filter,
      TasksListArgs::default()
    );
    assert_eq!(state.auth_notice, None);
  }

  #[test]
  fn task_created_resets_draft_and_error() {
    let mut state = signed_in();
    state.apply(Msg::Edited(
      FieldEdit::TaskTitle(
        "Pay rent".to_string()
      )
    ));
    state.apply(Msg::TaskRejected(
      "boom".to_string()
    ));
    state.apply(Msg::TaskCreated);

    assert_eq!(
      state.task_draft,
      TaskDraft::default()
    );
    assert_eq!(state.task_error, None);
  }

  #[test]
  fn failed_list_clears_rows_and_reports() {
    let mut state = signed_in();
    state.apply(Msg::TasksLoaded(vec![
      sample_task(),
    ]));
    state.apply(Msg::TasksFailed);
    assert!(state.tasks.is_empty());
    assert_eq!(
      state.list_error.as_deref(),
      Some(LIST_FAILED_MESSAGE)
    );
  }
}
