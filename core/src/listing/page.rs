// cafe-core/src/listing/page.rs

use serde::{Deserialize, Serialize};

/// One page of a list response: `{ "<rows>": [...], "total": n }`.
///
/// The rows key differs per service (`products`, `orders`, `users`), so all
/// three are accepted when reading. `total` is the count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
  #[serde(alias = "products", alias = "orders", alias = "users")]
  pub rows: Vec<T>,
  #[serde(default)]
  pub total: u64,
}

impl<T> Page<T> {
  pub fn new(rows: Vec<T>, total: u64) -> Self {
    Self { rows, total }
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }
}

impl<T> Default for Page<T> {
  fn default() -> Self {
    Self { rows: Vec::new(), total: 0 }
  }
}

/// `ceil(total / limit)`, never below 1 so an empty list still has a page.
pub fn total_pages(total: u64, limit: u32) -> u32 {
  if limit == 0 {
    return 1;
  }
  let pages = total.div_ceil(u64::from(limit));
  u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}
