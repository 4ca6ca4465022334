use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  debug,
  error
};

pub const DEFAULT_API_BASE: &str =
  "http://localhost:5000/api";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct ClientConfig {
  #[serde(default = "default_api_base")]
  pub api_base: String
}

fn default_api_base() -> String {
  DEFAULT_API_BASE.to_string()
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base: default_api_base()
    }
  }
}

impl ClientConfig {
  pub fn new(
    api_base: impl Into<String>
  ) -> Self {
    Self {
      api_base: api_base.into()
    }
  }

  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: ClientConfig =
      toml::from_str(text).context(
        "failed to parse client \
         config"
      )?;

    if cfg.api_base.trim().is_empty() {
      return Err(anyhow!(
        "api_base must not be empty"
      ));
    }

    debug!(api_base = %cfg.api_base, "parsed client config");
    Ok(cfg)
  }

  /// Parses `text`, logging and falling
  /// back to the defaults on any error.
  pub fn from_toml_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => cfg,
      | Err(err) => {
        error!(error = %format!("{err:#}"), "invalid client config; using defaults");
        Self::default()
      }
    }
  }

  pub fn endpoint(
    &self,
    path: &str
  ) -> String {
    format!(
      "{}/{}",
      self.api_base.trim_end_matches('/'),
      path.trim_start_matches('/')
    )
  }
}
