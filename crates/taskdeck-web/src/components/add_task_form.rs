use taskdeck_core::FieldEdit;
use taskdeck_core::forms::TaskDraft;
use web_sys::{
  HtmlInputElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddTaskFormProps {
  pub draft:     TaskDraft,
  pub error:     Option<String>,
  pub on_edit:   Callback<FieldEdit>,
  pub on_submit: Callback<()>
}

fn input_edit(
  on_edit: &Callback<FieldEdit>,
  make: fn(String) -> FieldEdit
) -> Callback<InputEvent> {
  let on_edit = on_edit.clone();
  Callback::from(move |e: InputEvent| {
    let input: HtmlInputElement =
      e.target_unchecked_into();
    on_edit.emit(make(input.value()));
  })
}

#[function_component(AddTaskForm)]
pub fn add_task_form(
  props: &AddTaskFormProps
) -> Html {
  let on_description = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: InputEvent| {
      let area: HtmlTextAreaElement =
        e.target_unchecked_into();
      on_edit.emit(
        FieldEdit::TaskDescription(
          area.value()
        )
      );
    })
  };
  let on_submit = props.on_submit.clone();

  html! {
      <div id="add-task-section" class="panel">
          <div class="header">{ "Add Task" }</div>
          <div class="field">
              <label for="new-title">{ "Title" }</label>
              <input
                  id="new-title"
                  value={props.draft.title.clone()}
                  oninput={input_edit(&props.on_edit, FieldEdit::TaskTitle)}
              />
          </div>
          <div class="field">
              <label for="new-desc">{ "Description" }</label>
              <textarea
                  id="new-desc"
                  value={props.draft.description.clone()}
                  oninput={on_description}
              />
          </div>
          <div class="field">
              <label for="new-due">{ "Due date" }</label>
              <input
                  id="new-due"
                  type="date"
                  value={props.draft.due_date.clone()}
                  oninput={input_edit(&props.on_edit, FieldEdit::TaskDueDate)}
              />
          </div>
          <div class="field">
              <label for="new-category">{ "Category" }</label>
              <input
                  id="new-category"
                  value={props.draft.category.clone()}
                  oninput={input_edit(&props.on_edit, FieldEdit::TaskCategory)}
              />
          </div>
          <div class="field">
              <label for="new-estimate">{ "Estimated time" }</label>
              <input
                  id="new-estimate"
                  placeholder="optional, e.g. 30m"
                  value={props.draft.estimated_time.clone()}
                  oninput={input_edit(&props.on_edit, FieldEdit::TaskEstimate)}
              />
          </div>
          <button id="add-task-btn" onclick={move |_| on_submit.emit(())}>
              { "Add Task" }
          </button>
          {
              match &props.error {
                  Some(error) => html! {
                      <div id="task-message" class="auth-message error-message">{ error.clone() }</div>
                  },
                  None => html! {}
              }
          }
      </div>
  }
}
