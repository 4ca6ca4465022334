use taskdeck_core::render::TaskRow;
use taskdeck_shared::{
  TaskId,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRow,
  pub on_toggle: Callback<(TaskId, TaskStatus)>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;
  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = row.id.clone();
    let next = row.next_status;
    move |_: MouseEvent| {
      on_toggle.emit((id.clone(), next))
    }
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = row.id.clone();
    move |_: MouseEvent| {
      on_delete.emit(id.clone())
    }
  };

  html! {
      <div class={classes!("task", row.overdue.then_some("overdue"))}>
          <div>
              <strong>{ row.title.clone() }</strong>
              { format!(" - {} - {}", row.status_label, row.due_label) }
              {
                  if row.overdue {
                      html! { <span class="badge overdue">{ "overdue" }</span> }
                  } else {
                      html! {}
                  }
              }
          </div>
          {
              match &row.category {
                  Some(category) => html! { <em>{ format!("Category: {category}") }</em> },
                  None => html! {}
              }
          }
          <div class="task-subtitle">{ row.description.clone() }</div>
          <div class="actions">
              <button onclick={on_toggle}>{ row.toggle_label }</button>
              <button onclick={on_delete}>{ "Delete" }</button>
          </div>
          <hr />
      </div>
  }
}
