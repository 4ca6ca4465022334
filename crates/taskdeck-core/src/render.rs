use chrono::NaiveDate;
use taskdeck_shared::{
  TaskDto,
  TaskId,
  TaskStatus
};

use crate::view::ActiveTab;

/// Visibility of every page region for a
/// given tab. Pure; the web layer maps
/// each flag to `display`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct Layout {
  pub auth:          bool,
  pub sidebar:       bool,
  pub logout_button: bool,
  pub dashboard:     bool,
  pub add_task:      bool,
  pub ai:            bool,
  pub telegram:      bool
}

impl Layout {
  pub fn for_tab(tab: ActiveTab) -> Self {
    let signed_in = tab.is_signed_in();
    Self {
      auth:          !signed_in,
      sidebar:       signed_in,
      logout_button: signed_in,
      dashboard:     tab
        == ActiveTab::Dashboard,
      add_task:      tab
        == ActiveTab::AddTask,
      ai:            tab == ActiveTab::Ai,
      telegram:      tab
        == ActiveTab::Telegram
    }
  }

  pub fn shows(
    &self,
    tab: ActiveTab
  ) -> bool {
    match tab {
      | ActiveTab::LoggedOut => self.auth,
      | ActiveTab::Dashboard => {
        self.dashboard
      }
      | ActiveTab::AddTask => {
        self.add_task
      }
      | ActiveTab::Ai => self.ai,
      | ActiveTab::Telegram => self.telegram
    }
  }
}

pub const DUE_DATE_FORMAT: &str =
  "%Y-%m-%d";

/// Everything one task block displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
  pub id:           TaskId,
  pub title:        String,
  pub status_label: String,
  pub due_label:    String,
  pub category:     Option<String>,
  pub description:  String,
  pub toggle_label: &'static str,
  pub next_status:  TaskStatus,
  pub overdue:      bool
}

impl TaskRow {
  pub fn from_task(
    task: &TaskDto,
    today: NaiveDate
  ) -> Self {
    let status_label = if task.is_done()
    {
      format!("{} ✅", task.status)
    } else {
      task.status.to_string()
    };
    let toggle_label = if task.is_done() {
      "Mark as Open"
    } else {
      "Mark as Done"
    };

    Self {
      id: task.id.clone(),
      title: task.title.clone(),
      status_label,
      due_label: format!(
        "due {}",
        task.due_date
      ),
      category: task
        .category_label()
        .map(str::to_string),
      description: task
        .description
        .clone(),
      toggle_label,
      next_status: task.status.toggled(),
      overdue: is_overdue(task, today)
    }
  }
}

pub fn task_rows(
  tasks: &[TaskDto],
  today: NaiveDate
) -> Vec<TaskRow> {
  tasks
    .iter()
    .map(|task| {
      TaskRow::from_task(task, today)
    })
    .collect()
}

/// Open tasks whose due date is strictly
/// before `today`. Unparseable dates are
/// never overdue.
pub fn is_overdue(
  task: &TaskDto,
  today: NaiveDate
) -> bool {
  if task.is_done() {
    return false;
  }
  NaiveDate::parse_from_str(
    task.due_date.trim(),
    DUE_DATE_FORMAT
  )
  .map(|due| due < today)
  .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task(
    status: TaskStatus,
    due: &str
  ) -> TaskDto {
    TaskDto {
      id:             TaskId::new("t1"),
      title:          "Water plants"
        .to_string(),
      description:    "balcony"
        .to_string(),
      due_date:       due.to_string(),
      category:       Some(
        "home".to_string()
      ),
      status,
      created_at:     None,
      estimated_time: None
    }
  }

  fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(
      raw,
      DUE_DATE_FORMAT
    )
    .expect("valid test date")
  }

  #[test]
  fn logged_out_layout_shows_only_auth() {
    let layout =
      Layout::for_tab(ActiveTab::LoggedOut);
    assert!(layout.auth);
    assert!(!layout.sidebar);
    assert!(!layout.logout_button);
    assert!(!layout.dashboard);
    assert!(!layout.add_task);
    assert!(!layout.ai);
    assert!(!layout.telegram);
  }

  #[test]
  fn each_signed_in_tab_shows_exactly_one_section()
  {
    for tab in ActiveTab::SIGNED_IN {
      let layout = Layout::for_tab(tab);
      assert!(!layout.auth);
      assert!(layout.sidebar);
      assert!(layout.logout_button);

      let shown = ActiveTab::SIGNED_IN
        .iter()
        .filter(|other| {
          layout.shows(**other)
        })
        .collect::<Vec<_>>();
      assert_eq!(shown, vec![&tab]);
    }
  }

  #[test]
  fn open_row_offers_mark_as_done() {
    let row = TaskRow::from_task(
      &task(
        TaskStatus::Open,
        "2024-05-10"
      ),
      day("2024-05-01")
    );
    assert_eq!(row.status_label, "open");
    assert_eq!(
      row.toggle_label,
      "Mark as Done"
    );
    assert_eq!(
      row.next_status,
      TaskStatus::Done
    );
    assert_eq!(
      row.due_label,
      "due 2024-05-10"
    );
    assert_eq!(
      row.category.as_deref(),
      Some("home")
    );
    assert!(!row.overdue);
  }

  #[test]
  fn done_row_offers_mark_as_open() {
    let row = TaskRow::from_task(
      &task(
        TaskStatus::Done,
        "2024-01-01"
      ),
      day("2024-05-01")
    );
    assert_eq!(
      row.status_label,
      "done ✅"
    );
    assert_eq!(
      row.toggle_label,
      "Mark as Open"
    );
    assert_eq!(
      row.next_status,
      TaskStatus::Open
    );
    assert!(!row.overdue);
  }

  #[test]
  fn overdue_needs_open_status_and_past_date()
  {
    let today = day("2024-05-01");
    assert!(is_overdue(
      &task(
        TaskStatus::Open,
        "2024-04-30"
      ),
      today
    ));
    assert!(!is_overdue(
      &task(
        TaskStatus::Open,
        "2024-05-01"
      ),
      today
    ));
    assert!(!is_overdue(
      &task(TaskStatus::Open, "soon"),
      today
    ));
  }
}
