use std::fmt;
use std::future::Future;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Method {
  Get,
  Post,
  Put,
  Delete
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Put => "PUT",
      | Self::Delete => "DELETE"
    }
  }
}

impl fmt::Display for Method {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A fully resolved request. `body` is
/// already-encoded JSON; transports must
/// send it as `application/json` and
/// always include session cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
  pub method: Method,
  pub url:    String,
  pub body:   Option<String>
}

impl HttpRequest {
  pub fn new(
    method: Method,
    url: impl Into<String>
  ) -> Self {
    Self {
      method,
      url: url.into(),
      body: None
    }
  }

  pub fn with_body(
    mut self,
    body: String
  ) -> Self {
    self.body = Some(body);
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  pub status: u16,
  pub body:   String
}

impl HttpResponse {
  pub fn new(
    status: u16,
    body: impl Into<String>
  ) -> Self {
    Self {
      status,
      body: body.into()
    }
  }

  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// The request never produced a
/// response (network down, CORS, etc).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl std::error::Error for TransportError {}

/// Seam between the typed client and
/// the platform's HTTP stack. Futures are
/// not required to be `Send`; in the
/// browser everything runs on the UI
/// thread.
pub trait Transport {
  fn send(
    &self,
    request: HttpRequest
  ) -> impl Future<
    Output = Result<
      HttpResponse,
      TransportError
    >
  >;
}
