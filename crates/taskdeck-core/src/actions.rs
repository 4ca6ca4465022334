use taskdeck_shared::{
  Credentials,
  TaskId,
  TaskPatch,
  TaskStatus,
  TasksListArgs
};
use tracing::{
  error,
  info,
  warn
};

use crate::api::TaskApi;
use crate::forms::TaskDraft;
use crate::state::Msg;
use crate::transport::Transport;
use crate::view::ActiveTab;

pub const LOGIN_FAILED_MESSAGE: &str =
  "Login failed";
pub const REGISTER_FAILED_MESSAGE: &str =
  "Registration failed";
pub const CREATE_FAILED_MESSAGE: &str =
  "Failed to add task.";
pub const RECOMMEND_FAILED_MESSAGE:
  &str = "Error";

/// One user gesture that talks to the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  CheckSession,
  Login(Credentials),
  Register(Credentials),
  Logout,
  SelectTab(ActiveTab),
  LoadTasks,
  ApplyFilter(TasksListArgs),
  CreateTask(TaskDraft),
  SetTaskStatus {
    id:     TaskId,
    status: TaskStatus
  },
  DeleteTask(TaskId),
  Recommend(String),
  LinkTelegram(String)
}

impl Action {
  pub fn name(&self) -> &'static str {
    match self {
      | Self::CheckSession => {
        "check_session"
      }
      | Self::Login(_) => "login",
      | Self::Register(_) => "register",
      | Self::Logout => "logout",
      | Self::SelectTab(_) => "select_tab",
      | Self::LoadTasks => "load_tasks",
      | Self::ApplyFilter(_) => {
        "apply_filter"
      }
      | Self::CreateTask(_) => {
        "create_task"
      }
      | Self::SetTaskStatus {
        ..
      } => "set_task_status",
      | Self::DeleteTask(_) => {
        "delete_task"
      }
      | Self::Recommend(_) => "recommend",
      | Self::LinkTelegram(_) => {
        "link_telegram"
      }
    }
  }
}

/// Runs `action` against the backend and
/// returns the messages to apply, in
/// order. Task mutations are followed by
/// a re-list using `filter`, whatever the
/// mutation's outcome.
#[tracing::instrument(skip_all, fields(action = action.name()))]
pub async fn perform<T: Transport>(
  api: &TaskApi<T>,
  filter: &TasksListArgs,
  action: Action
) -> Vec<Msg> {
  match action {
    | Action::CheckSession => {
      match api.who_am_i().await {
        | Ok(Some(username)) => {
          info!(%username, "existing session found");
          let mut msgs =
            vec![Msg::SessionProbed {
              username: Some(username)
            }];
          msgs.push(
            load_tasks(api, filter).await
          );
          msgs
        }
        | Ok(None) => {
          info!("no active session");
          vec![Msg::SessionProbed {
            username: None
          }]
        }
        | Err(err) => {
          error!(error = %err, "session probe failed");
          vec![Msg::SessionProbed {
            username: None
          }]
        }
      }
    }
    | Action::Login(credentials) => {
      match api.login(&credentials).await
      {
        | Ok(username) => {
          info!(username = %credentials.username, "logged in");
          vec![
            Msg::LoggedIn {
              username
            },
            load_tasks(api, filter).await,
          ]
        }
        | Err(err) => {
          warn!(error = %err, "login rejected");
          vec![Msg::LoginFailed(
            err.user_message(
              LOGIN_FAILED_MESSAGE
            )
          )]
        }
      }
    }
    | Action::Register(credentials) => {
      match api
        .register(&credentials)
        .await
      {
        | Ok(()) => {
          info!(username = %credentials.username, "registered");
          vec![Msg::Registered]
        }
        | Err(err) => {
          warn!(error = %err, "registration rejected");
          vec![Msg::RegisterFailed(
            err.user_message(
              REGISTER_FAILED_MESSAGE
            )
          )]
        }
      }
    }
    | Action::Logout => {
      if let Err(err) = api.logout().await
      {
        warn!(error = %err, "logout request failed; hiding dashboard anyway");
      }
      vec![Msg::LoggedOut]
    }
    | Action::SelectTab(tab) => {
      let mut msgs =
        vec![Msg::TabSelected(tab)];
      if tab == ActiveTab::Dashboard {
        msgs.push(
          load_tasks(api, filter).await
        );
      }
      msgs
    }
    | Action::LoadTasks => {
      vec![load_tasks(api, filter).await]
    }
    | Action::ApplyFilter(next) => {
      let loaded =
        load_tasks(api, &next).await;
      vec![Msg::FilterApplied(next), loaded]
    }
    | Action::CreateTask(draft) => {
      let create = match draft.validate() {
        | Ok(create) => create,
        | Err(message) => {
          return vec![Msg::TaskRejected(
            message.to_string()
          )];
        }
      };

      match api.create_task(&create).await
      {
        | Ok(()) => {
          info!(title = %create.title, "task created");
          vec![
            Msg::TaskCreated,
            load_tasks(api, filter).await,
          ]
        }
        | Err(err) => {
          warn!(error = %err, "task creation rejected");
          vec![Msg::TaskRejected(
            err.user_message(
              CREATE_FAILED_MESSAGE
            )
          )]
        }
      }
    }
    | Action::SetTaskStatus {
      id,
      status
    } => {
      if let Err(err) = api
        .update_task(
          &id,
          &TaskPatch::status(status)
        )
        .await
      {
        warn!(%id, error = %err, "status update failed");
      }
      vec![load_tasks(api, filter).await]
    }
    | Action::DeleteTask(id) => {
      if let Err(err) =
        api.delete_task(&id).await
      {
        warn!(%id, error = %err, "delete failed");
      }
      vec![load_tasks(api, filter).await]
    }
    | Action::Recommend(description) => {
      let text = match api
        .recommend(&description)
        .await
      {
        | Ok(text) => text,
        | Err(err) => {
          warn!(error = %err, "recommendation failed");
          err.user_message(
            RECOMMEND_FAILED_MESSAGE
          )
        }
      };
      vec![Msg::RecommendationShown(text)]
    }
    | Action::LinkTelegram(chat_id) => {
      match api
        .link_telegram(&chat_id)
        .await
      {
        | Ok(()) => {
          info!("telegram chat id linked")
        }
        | Err(err) => {
          warn!(error = %err, "telegram link failed")
        }
      }
      vec![]
    }
  }
}

async fn load_tasks<T: Transport>(
  api: &TaskApi<T>,
  filter: &TasksListArgs
) -> Msg {
  match api.list_tasks(filter).await {
    | Ok(tasks) => Msg::TasksLoaded(tasks),
    | Err(err) => {
      error!(error = %err, "task list failed");
      Msg::TasksFailed
    }
  }
}
