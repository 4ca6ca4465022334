use serde::Serialize;
use serde::de::DeserializeOwned;
use taskdeck_shared::{
  Credentials,
  ErrorBody,
  RecommendRequest,
  RecommendResponse,
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch,
  TasksListArgs,
  TelegramLink,
  WhoAmI
};
use tracing::{
  debug,
  warn
};
use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::error::{
  ApiError,
  Result
};
use crate::transport::{
  HttpRequest,
  HttpResponse,
  Method,
  Transport
};

/// Typed client for the task backend.
/// Every call is one request; nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct TaskApi<T> {
  transport: T,
  config:    ClientConfig
}

impl<T: Transport> TaskApi<T> {
  pub fn new(
    transport: T,
    config: ClientConfig
  ) -> Self {
    Self {
      transport,
      config
    }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  #[tracing::instrument(skip_all)]
  pub async fn who_am_i(
    &self
  ) -> Result<Option<String>> {
    let response = self
      .send(Method::Get, "auth/me", None)
      .await?;

    // A missing session is a 401 with an
    // error body, not a failure.
    let who = serde_json::from_str::<
      WhoAmI
    >(&response.body)
    .unwrap_or_default();
    let username = who
      .username
      .filter(|name| !name.is_empty());

    debug!(
      status = response.status,
      signed_in = username.is_some(),
      "session probe answered"
    );
    Ok(username)
  }

  /// Returns the username echoed by the
  /// server, when it sends one.
  #[tracing::instrument(skip_all, fields(username = %credentials.username))]
  pub async fn login(
    &self,
    credentials: &Credentials
  ) -> Result<Option<String>> {
    let body = encode(credentials)?;
    let response = self
      .send(
        Method::Post,
        "auth/login",
        Some(body)
      )
      .await?;
    expect_status(&response, &[200])?;

    let who = serde_json::from_str::<
      WhoAmI
    >(&response.body)
    .unwrap_or_default();
    Ok(who.username)
  }

  #[tracing::instrument(skip_all, fields(username = %credentials.username))]
  pub async fn register(
    &self,
    credentials: &Credentials
  ) -> Result<()> {
    let body = encode(credentials)?;
    let response = self
      .send(
        Method::Post,
        "auth/register",
        Some(body)
      )
      .await?;
    expect_status(&response, &[201])
  }

  #[tracing::instrument(skip_all)]
  pub async fn logout(&self) -> Result<()> {
    let response = self
      .send(
        Method::Post,
        "auth/logout",
        None
      )
      .await?;
    debug!(
      status = response.status,
      "logout answered"
    );
    Ok(())
  }

  #[tracing::instrument(skip_all, fields(status = ?args.status, category = ?args.category))]
  pub async fn list_tasks(
    &self,
    args: &TasksListArgs
  ) -> Result<Vec<TaskDto>> {
    let path = list_path(args);
    let response = self
      .send(Method::Get, &path, None)
      .await?;
    if !response.is_success() {
      return Err(reject(&response));
    }

    let rows: Vec<serde_json::Value> =
      decode(&response)?;
    let total = rows.len();
    let tasks: Vec<TaskDto> = rows
      .into_iter()
      .filter_map(decode_row)
      .collect();
    debug!(
      total,
      kept = tasks.len(),
      "listed tasks"
    );
    Ok(tasks)
  }

  #[tracing::instrument(skip_all, fields(id = %id))]
  pub async fn get_task(
    &self,
    id: &TaskId
  ) -> Result<TaskDto> {
    let response = self
      .send(
        Method::Get,
        &task_path(id),
        None
      )
      .await?;
    if !response.is_success() {
      return Err(reject(&response));
    }
    decode(&response)
  }

  #[tracing::instrument(skip_all, fields(title_len = create.title.len(), due_date = %create.due_date))]
  pub async fn create_task(
    &self,
    create: &TaskCreate
  ) -> Result<()> {
    let body = encode(create)?;
    let response = self
      .send(
        Method::Post,
        "tasks/",
        Some(body)
      )
      .await?;
    expect_status(
      &response,
      &[200, 201]
    )
  }

  #[tracing::instrument(skip_all, fields(id = %id, status = ?patch.status))]
  pub async fn update_task(
    &self,
    id: &TaskId,
    patch: &TaskPatch
  ) -> Result<()> {
    let body = encode(patch)?;
    let response = self
      .send(
        Method::Put,
        &task_path(id),
        Some(body)
      )
      .await?;
    if !response.is_success() {
      return Err(reject(&response));
    }
    Ok(())
  }

  #[tracing::instrument(skip_all, fields(id = %id))]
  pub async fn delete_task(
    &self,
    id: &TaskId
  ) -> Result<()> {
    let response = self
      .send(
        Method::Delete,
        &task_path(id),
        None
      )
      .await?;
    if !response.is_success() {
      return Err(reject(&response));
    }
    Ok(())
  }

  /// Succeeds only when the body carries
  /// a recommendation; otherwise the
  /// body's `error` becomes the message.
  #[tracing::instrument(skip_all, fields(description_len = description.len()))]
  pub async fn recommend(
    &self,
    description: &str
  ) -> Result<String> {
    let body = encode(&RecommendRequest {
      description: description
        .to_string()
    })?;
    let response = self
      .send(
        Method::Post,
        "ai/recommend",
        Some(body)
      )
      .await?;

    let parsed = serde_json::from_str::<
      RecommendResponse
    >(&response.body)
    .unwrap_or_default();
    match parsed.recommendation {
      | Some(text) if !text.is_empty() => {
        Ok(text)
      }
      | _ => Err(ApiError::Rejected {
        status:  response.status,
        message: parsed.error
      })
    }
  }

  #[tracing::instrument(skip_all)]
  pub async fn link_telegram(
    &self,
    chat_id: &str
  ) -> Result<()> {
    let body = encode(&TelegramLink {
      telegram_chat_id: chat_id
        .to_string()
    })?;
    let response = self
      .send(
        Method::Post,
        "tasks/update-chat-id",
        Some(body)
      )
      .await?;
    if !response.is_success() {
      return Err(reject(&response));
    }
    Ok(())
  }

  async fn send(
    &self,
    method: Method,
    path: &str,
    body: Option<String>
  ) -> Result<HttpResponse> {
    let url = self.config.endpoint(path);
    let mut request =
      HttpRequest::new(method, url);
    if let Some(body) = body {
      request = request.with_body(body);
    }

    debug!(method = %method, url = %request.url, "sending request");
    self
      .transport
      .send(request)
      .await
      .map_err(|err| {
        warn!(method = %method, path, error = %err, "request did not complete");
        ApiError::Transport(err.0)
      })
  }
}

fn list_path(
  args: &TasksListArgs
) -> String {
  let mut query =
    form_urlencoded::Serializer::new(
      String::new()
    );
  let mut has_query = false;
  if let Some(status) = args.status {
    query.append_pair(
      "status",
      status.as_str()
    );
    has_query = true;
  }
  if let Some(category) = args
    .category
    .as_deref()
    .map(str::trim)
    .filter(|c| !c.is_empty())
  {
    query
      .append_pair("category", category);
    has_query = true;
  }

  if has_query {
    format!("tasks/?{}", query.finish())
  } else {
    "tasks/".to_string()
  }
}

fn task_path(id: &TaskId) -> String {
  format!("tasks/{id}")
}

fn encode<B: Serialize + ?Sized>(
  body: &B
) -> Result<String> {
  serde_json::to_string(body).map_err(
    |err| ApiError::Encode(err.to_string())
  )
}

fn decode<R: DeserializeOwned>(
  response: &HttpResponse
) -> Result<R> {
  serde_json::from_str(&response.body)
    .map_err(|err| {
      ApiError::Decode(err.to_string())
    })
}

/// One malformed document must not hide
/// the rest of the list.
fn decode_row(
  row: serde_json::Value
) -> Option<TaskDto> {
  let id = row
    .get("_id")
    .map(ToString::to_string);
  match serde_json::from_value(row) {
    | Ok(task) => Some(task),
    | Err(err) => {
      warn!(
        id = id.as_deref().unwrap_or("<missing>"),
        error = %err,
        "skipping undecodable task"
      );
      None
    }
  }
}

fn expect_status(
  response: &HttpResponse,
  accepted: &[u16]
) -> Result<()> {
  if accepted.contains(&response.status)
  {
    Ok(())
  } else {
    Err(reject(response))
  }
}

fn reject(
  response: &HttpResponse
) -> ApiError {
  let message = serde_json::from_str::<
    ErrorBody
  >(&response.body)
  .ok()
  .and_then(|body| body.error);

  ApiError::Rejected {
    status: response.status,
    message
  }
}

#[cfg(test)]
mod tests {
  use taskdeck_shared::TaskStatus;

  use super::*;

  #[test]
  fn list_path_without_filters_is_bare() {
    assert_eq!(
      list_path(
        &TasksListArgs::default()
      ),
      "tasks/"
    );
  }

  #[test]
  fn list_path_encodes_filters() {
    let args = TasksListArgs {
      status:   Some(TaskStatus::Done),
      category: Some(
        "home & garden".to_string()
      )
    };
    assert_eq!(
      list_path(&args),
      "tasks/?status=done&category=home+%26+garden"
    );
  }

  #[test]
  fn blank_category_filter_is_dropped() {
    let args = TasksListArgs {
      status:   None,
      category: Some("  ".to_string())
    };
    assert_eq!(list_path(&args), "tasks/");
  }

  #[test]
  fn decode_row_skips_documents_without_id()
  {
    let good = serde_json::json!({
      "_id": "t1",
      "title": "Pay rent",
      "status": "open"
    });
    let broken = serde_json::json!({
      "title": "no id",
      "status": "open"
    });

    assert_eq!(
      decode_row(good)
        .map(|task| task.id),
      Some(TaskId::new("t1"))
    );
    assert_eq!(decode_row(broken), None);
  }

  #[test]
  fn reject_reads_error_field_when_present()
  {
    let with_field = HttpResponse::new(
      401,
      r#"{"error":"Invalid credentials"}"#
    );
    let html = HttpResponse::new(
      502,
      "<html>bad gateway</html>"
    );

    assert_eq!(
      reject(&with_field),
      ApiError::Rejected {
        status:  401,
        message: Some(
          "Invalid credentials"
            .to_string()
        )
      }
    );
    assert_eq!(
      reject(&html),
      ApiError::Rejected {
        status:  502,
        message: None
      }
    );
  }
}
