#![allow(dead_code)]

use std::collections::{
  HashMap,
  VecDeque
};

use parking_lot::Mutex;
use taskdeck_core::{
  ClientConfig,
  Dashboard,
  HttpRequest,
  HttpResponse,
  Method,
  TaskApi,
  Transport,
  TransportError
};
use taskdeck_shared::{
  TaskDto,
  TaskId,
  TaskStatus
};

pub const BASE: &str =
  "http://backend.test/api";

/// Scripted backend. Each route replays
/// its queued responses in order and keeps
/// answering with the last one.
#[derive(Default)]
pub struct MockTransport {
  routes:   Mutex<
    HashMap<
      (Method, String),
      VecDeque<HttpResponse>
    >
  >,
  requests: Mutex<Vec<HttpRequest>>
}

impl MockTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn respond(
    self,
    method: Method,
    path: &str,
    status: u16,
    body: impl Into<String>
  ) -> Self {
    self
      .routes
      .lock()
      .entry((method, path.to_string()))
      .or_default()
      .push_back(HttpResponse::new(
        status, body
      ));
    self
  }

  pub fn requests(&self) -> Vec<HttpRequest> {
    self.requests.lock().clone()
  }

  pub fn count(
    &self,
    method: Method,
    path: &str
  ) -> usize {
    self
      .requests
      .lock()
      .iter()
      .filter(|req| {
        req.method == method
          && relative(&req.url) == path
      })
      .count()
  }

  pub fn last_body(
    &self,
    method: Method,
    path: &str
  ) -> Option<serde_json::Value> {
    self
      .requests
      .lock()
      .iter()
      .rev()
      .find(|req| {
        req.method == method
          && relative(&req.url) == path
      })
      .and_then(|req| req.body.clone())
      .map(|body| {
        serde_json::from_str(&body)
          .expect("request body is json")
      })
  }
}

impl Transport for MockTransport {
  async fn send(
    &self,
    request: HttpRequest
  ) -> Result<HttpResponse, TransportError>
  {
    let key = (
      request.method,
      relative(&request.url).to_string()
    );
    self.requests.lock().push(request);

    let mut routes = self.routes.lock();
    let queue = routes
      .get_mut(&key)
      .ok_or_else(|| {
        TransportError(format!(
          "no route for {} {}",
          key.0, key.1
        ))
      })?;
    let response = if queue.len() > 1 {
      queue.pop_front()
    } else {
      queue.front().cloned()
    };
    response.ok_or_else(|| {
      TransportError(
        "route has no responses"
          .to_string()
      )
    })
  }
}

pub fn relative(url: &str) -> &str {
  url
    .strip_prefix(BASE)
    .map(|rest| {
      rest.trim_start_matches('/')
    })
    .unwrap_or(url)
}

pub fn api(
  transport: MockTransport
) -> TaskApi<MockTransport> {
  TaskApi::new(
    transport,
    ClientConfig::new(BASE)
  )
}

pub fn dashboard(
  transport: MockTransport
) -> Dashboard<MockTransport> {
  Dashboard::new(api(transport))
}

pub fn task(
  id: &str,
  title: &str,
  status: TaskStatus
) -> TaskDto {
  TaskDto {
    id: TaskId::new(id),
    title: title.to_string(),
    description: format!(
      "{title} details"
    ),
    due_date: "2030-01-01".to_string(),
    category: None,
    status,
    created_at: None,
    estimated_time: None
  }
}

pub fn tasks_json(
  tasks: &[TaskDto]
) -> String {
  serde_json::to_string(tasks)
    .expect("tasks encode")
}
