use thiserror::Error;

pub type Result<T> =
  std::result::Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
  /// The server answered with a status
  /// the operation does not accept.
  #[error("request rejected with status {status}: {}", message.as_deref().unwrap_or("<no error field>"))]
  Rejected {
    status:  u16,
    message: Option<String>
  },

  #[error("transport error: {0}")]
  Transport(String),

  #[error("failed to decode response: {0}")]
  Decode(String),

  #[error("failed to encode request: {0}")]
  Encode(String)
}

impl ApiError {
  /// Text for the inline message next
  /// to the control that failed.
  pub fn user_message(
    &self,
    fallback: &str
  ) -> String {
    match self {
      | Self::Rejected {
        message: Some(message),
        ..
      } if !message.trim().is_empty() => {
        message.clone()
      }
      | _ => fallback.to_string()
    }
  }

  pub fn status(&self) -> Option<u16> {
    match self {
      | Self::Rejected {
        status, ..
      } => Some(*status),
      | _ => None
    }
  }
}
