use gloo::net::http::Request;
use taskdeck_core::{
  HttpRequest,
  HttpResponse,
  Method,
  Transport,
  TransportError
};
use web_sys::RequestCredentials;

/// Browser `fetch` transport. Every request
/// carries the session cookie.
#[derive(
  Debug, Clone, Copy, Default, PartialEq,
)]
pub struct FetchTransport;

impl Transport for FetchTransport {
  async fn send(
    &self,
    request: HttpRequest
  ) -> Result<HttpResponse, TransportError>
  {
    let builder = match request.method {
      | Method::Get => {
        Request::get(&request.url)
      }
      | Method::Post => {
        Request::post(&request.url)
      }
      | Method::Put => {
        Request::put(&request.url)
      }
      | Method::Delete => {
        Request::delete(&request.url)
      }
    }
    .credentials(
      RequestCredentials::Include
    );

    let prepared = match request.body {
      | Some(body) => builder
        .header(
          "Content-Type",
          "application/json"
        )
        .body(body),
      | None => builder.build()
    }
    .map_err(|e| {
      TransportError(format!(
        "failed to build request: {e}"
      ))
    })?;

    let response =
      prepared.send().await.map_err(
        |e| {
          TransportError(format!(
            "fetch error: {e}"
          ))
        }
      )?;

    let status = response.status();
    let body =
      response.text().await.map_err(
        |e| {
          TransportError(format!(
            "failed to read body: {e}"
          ))
        }
      )?;

    Ok(HttpResponse::new(status, body))
  }
}
