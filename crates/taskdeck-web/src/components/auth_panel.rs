use taskdeck_core::FieldEdit;
use taskdeck_core::state::Notice;
use taskdeck_shared::Credentials;
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

use super::NoticeLine;

#[derive(Properties, PartialEq)]
pub struct AuthPanelProps {
  pub form:        Credentials,
  pub notice:      Option<Notice>,
  pub on_edit:     Callback<FieldEdit>,
  pub on_login:    Callback<()>,
  pub on_register: Callback<()>
}

#[function_component(AuthPanel)]
pub fn auth_panel(
  props: &AuthPanelProps
) -> Html {
  let on_username = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_edit.emit(FieldEdit::Username(
        input.value()
      ));
    })
  };
  let on_password = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_edit.emit(FieldEdit::Password(
        input.value()
      ));
    })
  };
  let on_login = props.on_login.clone();
  let on_register =
    props.on_register.clone();

  html! {
      <div id="auth" class="panel">
          <div class="header">{ "Sign in or register" }</div>
          <div class="field">
              <label for="auth-username">{ "Username" }</label>
              <input
                  id="auth-username"
                  value={props.form.username.clone()}
                  oninput={on_username}
              />
          </div>
          <div class="field">
              <label for="auth-password">{ "Password" }</label>
              <input
                  id="auth-password"
                  type="password"
                  value={props.form.password.clone()}
                  oninput={on_password}
              />
          </div>
          <div class="actions">
              <button id="login-btn" onclick={move |_| on_login.emit(())}>{ "Login" }</button>
              <button id="register-btn" onclick={move |_| on_register.emit(())}>{ "Register" }</button>
          </div>
          <NoticeLine notice={props.notice.clone()} />
      </div>
  }
}
