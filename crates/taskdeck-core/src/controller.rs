use taskdeck_shared::{
  TaskId,
  TaskStatus,
  TasksListArgs
};
use tracing::debug;

use crate::actions::{
  Action,
  perform
};
use crate::api::TaskApi;
use crate::state::{
  DashboardState,
  FieldEdit,
  Msg
};
use crate::transport::Transport;
use crate::view::ActiveTab;

/// Page controller: owns the client and
/// the view state and runs each action to
/// completion before returning.
#[derive(Debug)]
pub struct Dashboard<T> {
  api:   TaskApi<T>,
  state: DashboardState
}

impl<T: Transport> Dashboard<T> {
  pub fn new(api: TaskApi<T>) -> Self {
    Self {
      api,
      state: DashboardState::default()
    }
  }

  pub fn state(&self) -> &DashboardState {
    &self.state
  }

  pub fn api(&self) -> &TaskApi<T> {
    &self.api
  }

  pub fn apply(&mut self, msg: Msg) {
    self.state.apply(msg);
  }

  pub fn edit(&mut self, edit: FieldEdit) {
    self.apply(Msg::Edited(edit));
  }

  pub async fn dispatch(
    &mut self,
    action: Action
  ) {
    let name = action.name();
    let msgs = perform(
      &self.api,
      &self.state.filter,
      action
    )
    .await;
    debug!(
      action = name,
      messages = msgs.len(),
      "action finished"
    );
    for msg in msgs {
      self.state.apply(msg);
    }
  }

  pub async fn check_session(&mut self) {
    self
      .dispatch(Action::CheckSession)
      .await;
  }

  pub async fn login(&mut self) {
    let credentials =
      self.state.auth_form.clone();
    self
      .dispatch(Action::Login(
        credentials
      ))
      .await;
  }

  pub async fn register(&mut self) {
    let credentials =
      self.state.auth_form.clone();
    self
      .dispatch(Action::Register(
        credentials
      ))
      .await;
  }

  pub async fn logout(&mut self) {
    self.dispatch(Action::Logout).await;
  }

  pub async fn switch_tab(
    &mut self,
    tab: ActiveTab
  ) {
    self
      .dispatch(Action::SelectTab(tab))
      .await;
  }

  pub async fn list_tasks(&mut self) {
    self.dispatch(Action::LoadTasks).await;
  }

  pub async fn apply_filter(
    &mut self,
    filter: TasksListArgs
  ) {
    self
      .dispatch(Action::ApplyFilter(
        filter
      ))
      .await;
  }

  pub async fn create_task(&mut self) {
    let draft =
      self.state.task_draft.clone();
    self
      .dispatch(Action::CreateTask(draft))
      .await;
  }

  pub async fn toggle_task_status(
    &mut self,
    id: TaskId,
    next_status: TaskStatus
  ) {
    self
      .dispatch(Action::SetTaskStatus {
        id,
        status: next_status
      })
      .await;
  }

  pub async fn delete_task(
    &mut self,
    id: TaskId
  ) {
    self
      .dispatch(Action::DeleteTask(id))
      .await;
  }

  pub async fn recommend(&mut self) {
    let description =
      self.state.ai_prompt.clone();
    self
      .dispatch(Action::Recommend(
        description
      ))
      .await;
  }

  pub async fn link_telegram(&mut self) {
    let chat_id = self
      .state
      .telegram_chat_id
      .clone();
    self
      .dispatch(Action::LinkTelegram(
        chat_id
      ))
      .await;
  }

  pub fn toggle_theme(&mut self) {
    self.apply(Msg::ThemeToggled);
  }
}
