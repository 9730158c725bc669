// cafe-core/src/listing/filter.rs

use crate::order::StatusFilter;

/// Query parameters a list filter contributes next to `page` and `limit`.
pub trait ListFilter: Clone + PartialEq + Default + Send + Sync + 'static {
  fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Free-text `search` box of the users and products lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter(pub String);

impl SearchFilter {
  pub fn new(text: impl Into<String>) -> Self {
    Self(text.into())
  }

  pub fn text(&self) -> &str {
    &self.0
  }
}

impl ListFilter for SearchFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    let text = self.0.trim();
    if text.is_empty() {
      Vec::new()
    } else {
      vec![("search", text.to_string())]
    }
  }
}

impl ListFilter for StatusFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    match self {
      StatusFilter::All => Vec::new(),
      StatusFilter::Only(status) => vec![("status", status.as_wire().to_string())],
    }
  }
}

/// Unfiltered lists (the menu).
impl ListFilter for () {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    Vec::new()
  }
}
