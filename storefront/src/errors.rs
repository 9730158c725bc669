// cafe-storefront/src/errors.rs

use cafe_core::{CartError, FlowError, StatusError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  /// A local business-rule conflict, e.g. a duplicate cart entry.
  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// Non-2xx answer from a backend service. `message` is the `message`
  /// field of the error body when there was one.
  #[error("Backend responded with status {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
  Api { status: u16, message: Option<String> },

  #[error("Network Error: {0}")]
  Network(#[from] reqwest::Error),

  #[error("Unexpected response body: {0}")]
  Decode(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Flow Error: {source}")]
  Flow { source: FlowError },

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl AppError {
  /// The text a screen shows for this error.
  ///
  /// Locally detected problems (validation, conflicts, missing sign-in) and
  /// a server-provided `message` are shown as is; everything else gets the
  /// caller's `fallback`, e.g. `"Failed to place order"`.
  pub fn user_message(&self, fallback: &str) -> String {
    match self {
      AppError::Validation(m) | AppError::Conflict(m) | AppError::Auth(m) => m.clone(),
      AppError::Api {
        message: Some(m), ..
      } if !m.trim().is_empty() => m.clone(),
      _ => fallback.to_string(),
    }
  }

  /// HTTP status for backend errors.
  pub fn status(&self) -> Option<u16> {
    match self {
      AppError::Api { status, .. } => Some(*status),
      AppError::Network(e) => e.status().map(|s| s.as_u16()),
      _ => None,
    }
  }

  /// True for failures caught before any request was sent.
  pub fn is_local(&self) -> bool {
    matches!(self, AppError::Validation(_) | AppError::Conflict(_) | AppError::Auth(_))
  }
}

impl From<CartError> for AppError {
  fn from(err: CartError) -> Self {
    match err {
      CartError::AlreadyInCart { .. }
      | CartError::QuantityOverflow { .. }
      | CartError::TotalOverflow { .. } => AppError::Conflict(err.to_string()),
      CartError::NotInCart { .. } => AppError::NotFound(err.to_string()),
      CartError::NegativePrice { .. } | CartError::Empty => AppError::Validation(err.to_string()),
    }
  }
}

impl From<ValidationError> for AppError {
  fn from(err: ValidationError) -> Self {
    AppError::Validation(err.to_string())
  }
}

impl From<StatusError> for AppError {
  fn from(err: StatusError) -> Self {
    match err {
      StatusError::Unknown(_) => AppError::Validation(err.to_string()),
      StatusError::NotAllowed { .. } => AppError::Conflict(err.to_string()),
    }
  }
}

// Handler failures wrapped by the flow engine are unwrapped back into the
// AppError they started as.
impl From<FlowError> for AppError {
  fn from(err: FlowError) -> Self {
    match err {
      FlowError::HandlerError { source } => AppError::from(source),
      other => AppError::Flow { source: other },
    }
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
    AppError::Decode(err.to_string())
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    let err = match err.downcast::<AppError>() {
      Ok(app_err) => return app_err,
      Err(other) => other,
    };
    let err = match err.downcast::<reqwest::Error>() {
      Ok(http_err) => return AppError::Network(http_err),
      Err(other) => other,
    };
    AppError::Internal(format!("{:#}", err))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
