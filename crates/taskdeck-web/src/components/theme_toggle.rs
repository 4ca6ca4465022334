use taskdeck_core::Theme;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
  pub theme:     Theme,
  pub on_toggle: Callback<()>
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(
  props: &ThemeToggleProps
) -> Html {
  let on_toggle = props.on_toggle.clone();
  let title = match props.theme {
    | Theme::Light => "Switch to dark mode",
    | Theme::Dark => "Switch to light mode"
  };

  html! {
      <button
          id="dark-toggle"
          title={title}
          onclick={move |_| on_toggle.emit(())}
      >
          { "☀️ / 🌙" }
      </button>
  }
}
