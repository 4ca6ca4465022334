mod lenient;

use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
  #[default]
  Open,
  Done
}

impl TaskStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Open => "open",
      | Self::Done => "done"
    }
  }

  /// The status a toggle control
  /// moves the task to.
  pub fn toggled(self) -> Self {
    match self {
      | Self::Open => Self::Done,
      | Self::Done => Self::Open
    }
  }

  pub fn parse(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "open" => Some(Self::Open),
      | "done" => Some(Self::Done),
      | _ => None
    }
  }
}

impl fmt::Display for TaskStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Backend-assigned task identifier
/// (a Mongo object id rendered as hex).
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
  pub fn new(
    raw: impl Into<String>
  ) -> Self {
    Self(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskDto {
  #[serde(rename = "_id")]
  pub id:             TaskId,
  #[serde(
    default,
    deserialize_with = "lenient::text"
  )]
  pub title:          String,
  #[serde(
    default,
    deserialize_with = "lenient::text"
  )]
  pub description:    String,
  #[serde(
    default,
    deserialize_with = "lenient::text"
  )]
  pub due_date:       String,
  #[serde(
    default,
    deserialize_with = "lenient::optional_text"
  )]
  pub category:       Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient::status"
  )]
  pub status:         TaskStatus,
  #[serde(
    default,
    deserialize_with = "lenient::optional_text"
  )]
  pub created_at:     Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient::optional_text"
  )]
  pub estimated_time: Option<String>
}

impl TaskDto {
  /// Category for display; the backend
  /// stores a missing category as "".
  pub fn category_label(
    &self
  ) -> Option<&str> {
    self
      .category
      .as_deref()
      .map(str::trim)
      .filter(|c| !c.is_empty())
  }

  pub fn is_done(&self) -> bool {
    self.status == TaskStatus::Done
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TasksListArgs {
  pub status:   Option<TaskStatus>,
  pub category: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskCreate {
  pub title:          String,
  pub description:    String,
  pub due_date:       String,
  pub category:       String,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub estimated_time: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskPatch {
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub title:          Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub description:    Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date:       Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub status:         Option<TaskStatus>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub category:       Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub estimated_time: Option<String>
}

impl TaskPatch {
  pub fn status(
    status: TaskStatus
  ) -> Self {
    Self {
      status: Some(status),
      ..Self::default()
    }
  }

  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct Credentials {
  pub username: String,
  pub password: String
}

/// Body of `/auth/me` and of a
/// successful login. A missing session
/// answers with `error` instead.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct WhoAmI {
  #[serde(default)]
  pub username: Option<String>
}

/// The `{ "error": ... }` envelope every
/// failing endpoint answers with.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct ErrorBody {
  #[serde(default)]
  pub error: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct RecommendRequest {
  pub description: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct RecommendResponse {
  #[serde(default)]
  pub recommendation: Option<String>,
  #[serde(default)]
  pub error:          Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TelegramLink {
  pub telegram_chat_id: String
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn task_dto_reads_backend_shape() {
    let raw = r#"{
      "_id": "65f0c0ffee",
      "user": "alice",
      "title": "Ship release",
      "description": "tag and publish",
      "due_date": "2024-05-01",
      "created_at": "2024-04-20T10:00:00",
      "status": "done",
      "category": "",
      "estimated_time": ""
    }"#;

    let task: TaskDto =
      serde_json::from_str(raw)
        .expect("task should decode");

    assert_eq!(
      task.id,
      TaskId::new("65f0c0ffee")
    );
    assert_eq!(
      task.status,
      TaskStatus::Done
    );
    assert!(task.is_done());
    assert_eq!(
      task.category_label(),
      None
    );
  }

  #[test]
  fn task_dto_tolerates_missing_optional_fields()
  {
    let raw = r#"{"_id":"a1","title":"t","status":"open"}"#;
    let task: TaskDto =
      serde_json::from_str(raw)
        .expect("task should decode");

    assert!(task.description.is_empty());
    assert!(task.due_date.is_empty());
    assert_eq!(task.category, None);
    assert!(!task.is_done());
  }

  #[test]
  fn task_dto_reads_loosely_typed_fields()
  {
    let raw = r#"{
      "_id": "b2",
      "title": 42,
      "due_date": 20300101,
      "status": "in-progress",
      "category": null,
      "estimated_time": 30
    }"#;
    let task: TaskDto =
      serde_json::from_str(raw)
        .expect("task should decode");

    assert_eq!(task.title, "42");
    assert_eq!(task.due_date, "20300101");
    assert_eq!(
      task.status,
      TaskStatus::Open
    );
    assert_eq!(task.category, None);
    assert_eq!(
      task.estimated_time.as_deref(),
      Some("30")
    );
  }

  #[test]
  fn task_dto_without_status_is_open() {
    let task: TaskDto =
      serde_json::from_str(
        r#"{"_id":"c3","estimated_time":1.5}"#
      )
      .expect("task should decode");

    assert_eq!(
      task.status,
      TaskStatus::Open
    );
    assert_eq!(
      task.estimated_time.as_deref(),
      Some("1.5")
    );
  }

  #[test]
  fn status_toggle_flips_between_open_and_done()
  {
    assert_eq!(
      TaskStatus::Open.toggled(),
      TaskStatus::Done
    );
    assert_eq!(
      TaskStatus::Done.toggled(),
      TaskStatus::Open
    );
    assert_eq!(
      TaskStatus::parse(" done "),
      Some(TaskStatus::Done)
    );
    assert_eq!(
      TaskStatus::parse("deleted"),
      None
    );
  }

  #[test]
  fn status_patch_only_serializes_status()
  {
    let json = serde_json::to_value(
      TaskPatch::status(
        TaskStatus::Open
      )
    )
    .expect("patch should encode");

    assert_eq!(
      json,
      serde_json::json!({ "status": "open" })
    );
    assert!(
      TaskPatch::default().is_empty()
    );
  }

  #[test]
  fn task_create_omits_empty_estimate() {
    let create = TaskCreate {
      title:          "Title".to_string(),
      description:    String::new(),
      due_date:       "2024-06-01"
        .to_string(),
      category:       String::new(),
      estimated_time: None
    };

    let json =
      serde_json::to_value(&create)
        .expect("create should encode");

    assert_eq!(
      json,
      serde_json::json!({
        "title": "Title",
        "description": "",
        "due_date": "2024-06-01",
        "category": ""
      })
    );
  }
}
