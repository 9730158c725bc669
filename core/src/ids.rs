// cafe-core/src/ids.rs

//! Opaque identifiers issued by the backend (Mongo-style `_id` strings).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! backend_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(String);

    impl $name {
      pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<&str> for $name {
      fn from(raw: &str) -> Self {
        Self(raw.to_string())
      }
    }

    impl From<String> for $name {
      fn from(raw: String) -> Self {
        Self(raw)
      }
    }
  };
}

backend_id!(
  /// Catalog product id; also the key of a cart line.
  ProductId
);
backend_id!(OrderId);
backend_id!(UserId);

impl OrderId {
  /// Short reference shown to people: the last six characters, uppercased.
  pub fn reference(&self) -> String {
    let chars: Vec<char> = self.0.chars().collect();
    let start = chars.len().saturating_sub(6);
    chars[start..].iter().collect::<String>().to_uppercase()
  }
}
