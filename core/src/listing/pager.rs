// cafe-core/src/listing/pager.rs

use super::filter::ListFilter;
use super::page::total_pages;
use crate::validation::ValidationError;
use tracing::debug;

/// Which page of a filtered list a screen is on.
///
/// Every change that alters what the server would return (filter, page size)
/// goes back to page 1. Methods that change the position return `true` when
/// the caller has to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager<F: ListFilter> {
  page: u32,
  limit: u32,
  page_sizes: &'static [u32],
  total_pages: u32,
  filter: F,
}

impl<F: ListFilter> Pager<F> {
  /// `limit` must be one of `page_sizes`; it falls back to the first offered
  /// size otherwise.
  pub fn new(limit: u32, page_sizes: &'static [u32]) -> Self {
    let limit = if page_sizes.contains(&limit) {
      limit
    } else {
      page_sizes.first().copied().unwrap_or(limit.max(1))
    };
    Self {
      page: 1,
      limit,
      page_sizes,
      total_pages: 1,
      filter: F::default(),
    }
  }

  pub fn page(&self) -> u32 {
    self.page
  }

  pub fn limit(&self) -> u32 {
    self.limit
  }

  pub fn page_sizes(&self) -> &'static [u32] {
    self.page_sizes
  }

  pub fn total_pages(&self) -> u32 {
    self.total_pages
  }

  pub fn filter(&self) -> &F {
    &self.filter
  }

  pub fn has_prev(&self) -> bool {
    self.page > 1
  }

  pub fn has_next(&self) -> bool {
    self.page < self.total_pages
  }

  pub fn next(&mut self) -> bool {
    if !self.has_next() {
      return false;
    }
    self.page += 1;
    true
  }

  pub fn prev(&mut self) -> bool {
    if !self.has_prev() {
      return false;
    }
    self.page -= 1;
    true
  }

  /// Jumps to `page` if it exists.
  pub fn go_to(&mut self, page: u32) -> bool {
    if page == 0 || page > self.total_pages || page == self.page {
      return false;
    }
    self.page = page;
    true
  }

  /// New filter, back to page 1. Always asks for a fetch, even when the
  /// filter text is unchanged, so "Search" re-runs the query.
  pub fn set_filter(&mut self, filter: F) -> bool {
    debug!(old_page = self.page, "Filter changed, resetting to page 1.");
    self.filter = filter;
    self.page = 1;
    true
  }

  /// New page size from the offered list, back to page 1.
  pub fn set_limit(&mut self, limit: u32) -> Result<bool, ValidationError> {
    if !self.page_sizes.contains(&limit) {
      return Err(ValidationError::InvalidPageSize);
    }
    self.limit = limit;
    self.page = 1;
    Ok(true)
  }

  /// Records the server's total count. Returns `true` when the current page
  /// no longer exists (rows were deleted) and it was pulled back to the last
  /// page, which then needs a fetch.
  pub fn apply_total(&mut self, total: u64) -> bool {
    self.total_pages = total_pages(total, self.limit);
    if self.page > self.total_pages {
      self.page = self.total_pages;
      return true;
    }
    false
  }

  /// `page`, `limit` and the filter's own parameters.
  pub fn query(&self) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
    pairs.extend(self.filter.query_pairs());
    pairs
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::listing::SearchFilter;
  use crate::order::{OrderStatus, StatusFilter};

  const SIZES: &[u32] = &[3, 5, 10];

  #[test]
  fn starts_on_first_page_with_one_total_page() {
    let pager: Pager<StatusFilter> = Pager::new(3, SIZES);
    assert_eq!(pager.page(), 1);
    assert_eq!(pager.total_pages(), 1);
    assert!(!pager.has_prev());
    assert!(!pager.has_next());
  }

  #[test]
  fn unknown_default_limit_falls_back() {
    let pager: Pager<()> = Pager::new(7, SIZES);
    assert_eq!(pager.limit(), 3);
  }

  #[test]
  fn cannot_walk_past_either_end() {
    let mut pager: Pager<StatusFilter> = Pager::new(3, SIZES);
    pager.apply_total(7);
    assert_eq!(pager.total_pages(), 3);
    assert!(!pager.prev());
    assert!(pager.next());
    assert!(pager.next());
    assert!(!pager.next());
    assert_eq!(pager.page(), 3);
    assert!(!pager.go_to(4));
    assert!(pager.go_to(1));
  }

  #[test]
  fn filter_and_limit_changes_reset_page() {
    let mut pager: Pager<StatusFilter> = Pager::new(3, SIZES);
    pager.apply_total(30);
    pager.next();
    pager.next();
    assert!(pager.set_filter(StatusFilter::Only(OrderStatus::Pending)));
    assert_eq!(pager.page(), 1);

    pager.next();
    assert_eq!(pager.set_limit(10), Ok(true));
    assert_eq!(pager.page(), 1);
    assert_eq!(pager.set_limit(4), Err(ValidationError::InvalidPageSize));
    assert_eq!(pager.limit(), 10);
  }

  #[test]
  fn shrinking_total_clamps_page() {
    let mut pager: Pager<SearchFilter> = Pager::new(5, &[5, 10, 20]);
    pager.apply_total(11);
    pager.go_to(3);
    assert!(pager.apply_total(10));
    assert_eq!(pager.page(), 2);
    assert!(!pager.apply_total(10));
  }

  #[test]
  fn query_carries_page_limit_and_filter() {
    let mut pager: Pager<SearchFilter> = Pager::new(10, &[5, 10, 20, 50]);
    pager.set_filter(SearchFilter::new("mocha"));
    assert_eq!(
      pager.query(),
      vec![
        ("page", "1".to_string()),
        ("limit", "10".to_string()),
        ("search", "mocha".to_string()),
      ]
    );
  }
}
