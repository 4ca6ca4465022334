use taskdeck_core::render::TaskRow;
use taskdeck_shared::{
  TaskId,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:      Vec<TaskRow>,
  pub error:     Option<String>,
  pub on_toggle: Callback<(TaskId, TaskStatus)>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div id="task-list" class="panel list">
          <div class="header">{ "Tasks" }</div>
          {
              if let Some(error) = &props.error {
                  html! { <div class="auth-message error-message">{ error.clone() }</div> }
              } else if props.rows.is_empty() {
                  html! { <div class="empty">{ "No tasks yet." }</div> }
              } else {
                  html! {}
              }
          }
          {
              for props.rows.iter().cloned().map(|row| html! {
                  <TaskListRow
                      key={row.id.to_string()}
                      row={row.clone()}
                      on_toggle={props.on_toggle.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </div>
  }
}
