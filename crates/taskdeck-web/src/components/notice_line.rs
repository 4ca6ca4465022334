use taskdeck_core::state::Notice;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NoticeLineProps {
  pub notice: Option<Notice>
}

/// Inline message shown under the control
/// that produced it.
#[function_component(NoticeLine)]
pub fn notice_line(
  props: &NoticeLineProps
) -> Html {
  match &props.notice {
    | Some(notice) => html! {
        <div class={classes!("auth-message", notice.class())}>
            { notice.text.clone() }
        </div>
    },
    | None => html! {}
  }
}
