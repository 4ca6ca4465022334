//! Field decoders for task documents.
//! The backend stores whatever JSON the
//! client sent, so scalar fields may come
//! back as numbers or booleans.

use serde::{
  Deserialize,
  Deserializer
};

use crate::TaskStatus;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
  Text(String),
  Integer(i64),
  Float(f64),
  Flag(bool)
}

impl Scalar {
  fn into_text(self) -> String {
    match self {
      | Self::Text(text) => text,
      | Self::Integer(n) => n.to_string(),
      | Self::Float(n) => n.to_string(),
      | Self::Flag(b) => b.to_string()
    }
  }
}

pub(crate) fn text<'de, D>(
  deserializer: D
) -> Result<String, D::Error>
where
  D: Deserializer<'de>
{
  Ok(
    optional_text(deserializer)?
      .unwrap_or_default()
  )
}

pub(crate) fn optional_text<'de, D>(
  deserializer: D
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>
{
  Ok(
    Option::<Scalar>::deserialize(
      deserializer
    )?
    .map(Scalar::into_text)
  )
}

/// Anything other than `done` is shown
/// and toggled as an open task.
pub(crate) fn status<'de, D>(
  deserializer: D
) -> Result<TaskStatus, D::Error>
where
  D: Deserializer<'de>
{
  let raw = optional_text(deserializer)?;
  Ok(
    raw
      .as_deref()
      .and_then(TaskStatus::parse)
      .unwrap_or_default()
  )
}
