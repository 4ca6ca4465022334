mod storage;

use std::rc::Rc;

use chrono::Local;
use gloo::console::log;
use taskdeck_core::render::task_rows;
use taskdeck_core::{
  Action,
  ActiveTab,
  ClientConfig,
  DashboardState,
  FieldEdit,
  Msg,
  TaskApi,
  perform
};
use taskdeck_shared::{
  TaskId,
  TaskStatus,
  TasksListArgs
};
use yew::{
  Callback,
  Html,
  Reducible,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer
};

use self::storage::{
  load_theme,
  save_theme
};
use crate::api::FetchTransport;
use crate::components::{
  AddTaskForm,
  AiPanel,
  AuthPanel,
  Sidebar,
  TaskFilters,
  TaskList,
  TelegramPanel,
  ThemeToggle
};

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/client.toml");

#[derive(Clone, PartialEq)]
struct PageState(DashboardState);

impl Reducible for PageState {
  type Action = Msg;

  fn reduce(
    self: Rc<Self>,
    msg: Msg
  ) -> Rc<Self> {
    let mut next =
      Rc::unwrap_or_clone(self);
    next.0.apply(msg);
    Rc::new(next)
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let page = use_reducer(|| {
    PageState(DashboardState::with_theme(
      load_theme()
    ))
  });
  let api = use_memo((), |_| {
    TaskApi::new(
      FetchTransport,
      load_client_config()
    )
  });

  let run = {
    let dispatcher = page.dispatcher();
    let api = api.clone();
    let filter = page.0.filter.clone();
    Callback::from(move |action: Action| {
      ui_debug("action.start", action.name());
      let dispatcher = dispatcher.clone();
      let api = api.clone();
      let filter = filter.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          for msg in
            perform(&*api, &filter, action)
              .await
          {
            dispatcher.dispatch(msg);
          }
        }
      );
    })
  };

  {
    let run = run.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "probing session"
      );
      run.emit(Action::CheckSession);
      || ()
    });
  }

  {
    use_effect_with(
      page.0.theme,
      move |theme| {
        save_theme(*theme);
        tracing::debug!(
          theme = theme.storage_value(),
          "persisted theme"
        );
        || ()
      }
    );
  }

  let state = &page.0;
  let layout = state.layout();

  let on_edit = {
    let dispatcher = page.dispatcher();
    Callback::from(move |edit: FieldEdit| {
      dispatcher.dispatch(Msg::Edited(edit))
    })
  };
  let on_toggle_theme = {
    let dispatcher = page.dispatcher();
    Callback::from(move |()| {
      dispatcher.dispatch(Msg::ThemeToggled)
    })
  };
  let on_login = {
    let run = run.clone();
    let form = state.auth_form.clone();
    Callback::from(move |()| {
      run.emit(Action::Login(form.clone()))
    })
  };
  let on_register = {
    let run = run.clone();
    let form = state.auth_form.clone();
    Callback::from(move |()| {
      run.emit(Action::Register(
        form.clone()
      ))
    })
  };
  let on_logout = {
    let run = run.clone();
    Callback::from(move |()| {
      run.emit(Action::Logout)
    })
  };
  let on_select_tab = {
    let run = run.clone();
    Callback::from(move |tab: ActiveTab| {
      run.emit(Action::SelectTab(tab))
    })
  };
  let on_apply_filter = {
    let run = run.clone();
    Callback::from(
      move |filter: TasksListArgs| {
        run.emit(Action::ApplyFilter(
          filter
        ))
      }
    )
  };
  let on_toggle_task = {
    let run = run.clone();
    Callback::from(
      move |(id, status): (
        TaskId,
        TaskStatus
      )| {
        run.emit(Action::SetTaskStatus {
          id,
          status
        })
      }
    )
  };
  let on_delete_task = {
    let run = run.clone();
    Callback::from(move |id: TaskId| {
      run.emit(Action::DeleteTask(id))
    })
  };
  let on_add_task = {
    let run = run.clone();
    let draft = state.task_draft.clone();
    Callback::from(move |()| {
      run.emit(Action::CreateTask(
        draft.clone()
      ))
    })
  };
  let on_recommend = {
    let run = run.clone();
    let prompt = state.ai_prompt.clone();
    Callback::from(move |()| {
      run.emit(Action::Recommend(
        prompt.clone()
      ))
    })
  };
  let on_link_telegram = {
    let run = run.clone();
    let chat_id =
      state.telegram_chat_id.clone();
    Callback::from(move |()| {
      run.emit(Action::LinkTelegram(
        chat_id.clone()
      ))
    })
  };

  let today = Local::now().date_naive();

  html! {
      <div class={classes!("app-shell", state.theme.shell_class())}>
          <ThemeToggle theme={state.theme} on_toggle={on_toggle_theme} />
          {
              if layout.auth {
                  html! {
                      <AuthPanel
                          form={state.auth_form.clone()}
                          notice={state.auth_notice.clone()}
                          on_edit={on_edit.clone()}
                          on_login={on_login}
                          on_register={on_register}
                      />
                  }
              } else {
                  html! {}
              }
          }
          {
              if layout.sidebar {
                  html! {
                      <Sidebar
                          active={state.tab}
                          username={state.username.clone()}
                          on_select={on_select_tab}
                          on_logout={on_logout}
                      />
                  }
              } else {
                  html! {}
              }
          }
          <main class="workspace">
              {
                  if layout.dashboard {
                      html! {
                          <section id="dashboard">
                              <TaskFilters filter={state.filter.clone()} on_apply={on_apply_filter} />
                              <TaskList
                                  rows={task_rows(&state.tasks, today)}
                                  error={state.list_error.clone()}
                                  on_toggle={on_toggle_task}
                                  on_delete={on_delete_task}
                              />
                          </section>
                      }
                  } else {
                      html! {}
                  }
              }
              {
                  if layout.add_task {
                      html! {
                          <AddTaskForm
                              draft={state.task_draft.clone()}
                              error={state.task_error.clone()}
                              on_edit={on_edit.clone()}
                              on_submit={on_add_task}
                          />
                      }
                  } else {
                      html! {}
                  }
              }
              {
                  if layout.ai {
                      html! {
                          <AiPanel
                              prompt={state.ai_prompt.clone()}
                              result={state.ai_result.clone()}
                              on_edit={on_edit.clone()}
                              on_submit={on_recommend}
                          />
                      }
                  } else {
                      html! {}
                  }
              }
              {
                  if layout.telegram {
                      html! {
                          <TelegramPanel
                              chat_id={state.telegram_chat_id.clone()}
                              on_edit={on_edit.clone()}
                              on_submit={on_link_telegram}
                          />
                      }
                  } else {
                      html! {}
                  }
              }
          </main>
      </div>
  }
}

fn load_client_config() -> ClientConfig {
  let config =
    ClientConfig::from_toml_or_default(
      CLIENT_CONFIG_TOML
    );
  tracing::info!(
    api_base = %config.api_base,
    "loaded client config"
  );
  config
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
