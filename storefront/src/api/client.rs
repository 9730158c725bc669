// cafe-storefront/src/api/client.rs

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, field, info_span, warn, Instrument, Span};
use url::Url;
use uuid::Uuid;

/// Correlation header attached to every outbound request.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Thin JSON client over the backend base URL.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
  http: Client,
  base_url: Url,
}

/// Error body the services send with non-2xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  #[serde(default)]
  message: Option<String>,
}

impl ApiClient {
  pub fn new(config: &AppConfig) -> Result<Self> {
    let http = Client::builder().timeout(config.http_timeout).build()?;
    Ok(Self {
      http,
      base_url: config.api_url.clone(),
    })
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Base URL plus percent-encoded path segments, e.g. `["api", "orders", email]`.
  pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| AppError::Config(format!("'{}' cannot be used as a base URL", self.base_url)))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }

  pub async fn get_json<T: DeserializeOwned>(
    &self,
    url: Url,
    query: &[(&'static str, String)],
    bearer: Option<&str>,
  ) -> Result<T> {
    let response = self.execute::<()>(Method::GET, url, query, bearer, None).await?;
    decode(response).await
  }

  pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    &self,
    url: Url,
    body: &B,
    bearer: Option<&str>,
  ) -> Result<T> {
    let response = self.execute(Method::POST, url, &[], bearer, Some(body)).await?;
    decode(response).await
  }

  /// Sends `body` and ignores whatever the service answers with on success.
  pub async fn send_json<B: Serialize + ?Sized>(
    &self,
    method: Method,
    url: Url,
    body: &B,
    bearer: Option<&str>,
  ) -> Result<()> {
    self.execute(method, url, &[], bearer, Some(body)).await?;
    Ok(())
  }

  pub async fn delete(&self, url: Url, bearer: Option<&str>) -> Result<()> {
    self.execute::<()>(Method::DELETE, url, &[], bearer, None).await?;
    Ok(())
  }

  async fn execute<B: Serialize + ?Sized>(
    &self,
    method: Method,
    url: Url,
    query: &[(&'static str, String)],
    bearer: Option<&str>,
    body: Option<&B>,
  ) -> Result<Response> {
    let request_id = Uuid::new_v4();
    let span = info_span!(
      "api_request",
      method = %method,
      path = url.path(),
      request_id = %request_id,
      status = field::Empty
    );

    async move {
      let mut builder = self
        .http
        .request(method, url)
        .header(REQUEST_ID_HEADER, request_id.to_string());
      if !query.is_empty() {
        builder = builder.query(query);
      }
      if let Some(token) = bearer {
        builder = builder.bearer_auth(token);
      }
      if let Some(body) = body {
        builder = builder.json(body);
      }

      let response = builder.send().await.map_err(|e| {
        warn!(error = %e, "Request did not complete.");
        AppError::Network(e)
      })?;
      let status = response.status();
      Span::current().record("status", status.as_u16());

      if status.is_success() {
        debug!("Request succeeded.");
        return Ok(response);
      }

      let text = response.text().await.unwrap_or_default();
      let err = error_from_body(status.as_u16(), &text);
      warn!(error = %err, "Backend rejected the request.");
      Err(err)
    }
    .instrument(span)
    .await
  }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
  let bytes = response.bytes().await?;
  serde_json::from_slice(&bytes).map_err(AppError::from)
}

/// `Api { status, message }` from a non-2xx body; the message is taken from
/// a JSON `{"message": "..."}` body and dropped otherwise.
pub(crate) fn error_from_body(status: u16, body: &str) -> AppError {
  let message = serde_json::from_str::<ErrorBody>(body)
    .ok()
    .and_then(|b| b.message)
    .filter(|m| !m.trim().is_empty());
  AppError::Api { status, message }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base: &str) -> ApiClient {
    let cfg = AppConfig::new(crate::config::parse_base_url(base).unwrap());
    ApiClient::new(&cfg).unwrap()
  }

  #[test]
  fn endpoint_encodes_segments() {
    let api = client("http://localhost:5000");
    let url = api.endpoint(&["api", "orders", "ash cafe@x.com"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/api/orders/ash%20cafe@x.com");
  }

  #[test]
  fn endpoint_keeps_base_prefix() {
    let api = client("http://localhost:5000/v2/");
    let url = api.endpoint(&["api", "products"]).unwrap();
    assert_eq!(url.path(), "/v2/api/products");
  }

  #[test]
  fn error_body_message_is_extracted() {
    let err = error_from_body(409, r#"{"message":"User already exists"}"#);
    assert!(matches!(err, AppError::Api { status: 409, message: Some(ref m) } if m == "User already exists"));

    let err = error_from_body(502, "<html>Bad gateway</html>");
    assert!(matches!(err, AppError::Api { status: 502, message: None }));
  }
}
