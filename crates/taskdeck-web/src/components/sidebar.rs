use taskdeck_core::ActiveTab;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub active:    ActiveTab,
  pub username:  Option<String>,
  pub on_select: Callback<ActiveTab>,
  pub on_logout: Callback<()>
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let make_item = |tab: ActiveTab| {
    let class = if props.active == tab {
      "item active"
    } else {
      "item"
    };
    let on_select =
      props.on_select.clone();
    html! {
        <div
            id={format!("tab-{}", tab.as_key())}
            class={class}
            onclick={move |_| on_select.emit(tab)}
        >
            { tab.label() }
        </div>
    }
  };
  let on_logout = props.on_logout.clone();

  html! {
      <nav id="sidebar" class="panel sidebar">
          {
              match &props.username {
                  Some(name) => html! { <div class="header">{ format!("Signed in as {name}") }</div> },
                  None => html! { <div class="header">{ "Taskdeck" }</div> }
              }
          }
          { for ActiveTab::SIGNED_IN.into_iter().map(make_item) }
          <button id="logout-btn" onclick={move |_| on_logout.emit(())}>
              { "Logout" }
          </button>
      </nav>
  }
}
