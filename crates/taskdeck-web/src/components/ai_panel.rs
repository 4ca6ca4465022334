use taskdeck_core::FieldEdit;
use web_sys::HtmlTextAreaElement;
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
pub struct AiPanelProps {
  pub prompt:    String,
  pub result:    Option<String>,
  pub on_edit:   Callback<FieldEdit>,
  pub on_submit: Callback<()>
}

#[function_component(AiPanel)]
pub fn ai_panel(
  props: &AiPanelProps
) -> Html {
  let on_input = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: InputEvent| {
      let area: HtmlTextAreaElement =
        e.target_unchecked_into();
      on_edit.emit(FieldEdit::AiPrompt(
        area.value()
      ));
    })
  };
  let on_submit = props.on_submit.clone();

  html! {
      <div id="ai-section" class="panel">
          <div class="header">{ "AI Assistant" }</div>
          <div class="field">
              <label for="ai-input">{ "Describe a task" }</label>
              <textarea
                  id="ai-input"
                  value={props.prompt.clone()}
                  oninput={on_input}
              />
          </div>
          <button id="ai-recommend-btn" onclick={move |_| on_submit.emit(())}>
              { "Get recommendation" }
          </button>
          <div id="ai-result">{ props.result.clone().unwrap_or_default() }</div>
      </div>
  }
}
