use taskdeck_shared::{
  TaskStatus,
  TasksListArgs
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFiltersProps {
  pub filter:   TasksListArgs,
  pub on_apply: Callback<TasksListArgs>
}

#[function_component(TaskFilters)]
pub fn task_filters(
  props: &TaskFiltersProps
) -> Html {
  let applied_category = props
    .filter
    .category
    .clone()
    .unwrap_or_default();
  let category_draft = {
    let initial = applied_category.clone();
    use_state(move || initial)
  };
  {
    // Follow the applied filter, which a
    // sign-out resets.
    let category_draft =
      category_draft.clone();
    use_effect_with(
      applied_category,
      move |category| {
        category_draft.set(category.clone());
        || ()
      }
    );
  }

  let status_value = props
    .filter
    .status
    .map(TaskStatus::as_str)
    .unwrap_or("all");

  let on_status_change = {
    let on_apply = props.on_apply.clone();
    let filter = props.filter.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      on_apply.emit(TasksListArgs {
        status: TaskStatus::parse(
          &select.value()
        ),
        ..filter.clone()
      });
    })
  };

  let on_category_input = {
    let category_draft =
      category_draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      category_draft.set(input.value());
    })
  };

  let on_category_apply = {
    let on_apply = props.on_apply.clone();
    let filter = props.filter.clone();
    let category_draft =
      category_draft.clone();
    move |_: MouseEvent| {
      let category = category_draft
        .trim()
        .to_string();
      on_apply.emit(TasksListArgs {
        category: (!category.is_empty())
          .then_some(category),
        ..filter.clone()
      });
    }
  };

  html! {
      <div class="filters">
          <div class="field">
              <label>{ "Status" }</label>
              <select onchange={on_status_change}>
                  <option value="all" selected={status_value == "all"}>{ "All" }</option>
                  <option value="open" selected={status_value == "open"}>{ "Open" }</option>
                  <option value="done" selected={status_value == "done"}>{ "Done" }</option>
              </select>
          </div>
          <div class="field">
              <label>{ "Category" }</label>
              <input
                  value={(*category_draft).clone()}
                  placeholder="Any category"
                  oninput={on_category_input}
              />
              <button onclick={on_category_apply}>{ "Filter" }</button>
          </div>
      </div>
  }
}
