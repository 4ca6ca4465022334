use taskdeck_core::FieldEdit;
use web_sys::HtmlInputElement;
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
pub struct TelegramPanelProps {
  pub chat_id:   String,
  pub on_edit:   Callback<FieldEdit>,
  pub on_submit: Callback<()>
}

#[function_component(TelegramPanel)]
pub fn telegram_panel(
  props: &TelegramPanelProps
) -> Html {
  let on_input = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_edit.emit(
        FieldEdit::TelegramChatId(
          input.value()
        )
      );
    })
  };
  let on_submit = props.on_submit.clone();

  html! {
      <div id="telegram-section" class="panel">
          <div class="header">{ "Telegram" }</div>
          <p class="hint">
              { "Link your Telegram chat to get notified when tasks are created or completed." }
          </p>
          <div class="field">
              <label for="telegram-id">{ "Chat ID" }</label>
              <input
                  id="telegram-id"
                  value={props.chat_id.clone()}
                  oninput={on_input}
              />
          </div>
          <button id="update-telegram-btn" onclick={move |_| on_submit.emit(())}>
              { "Link Telegram" }
          </button>
      </div>
  }
}
