// cafe-core/src/listing/feed.rs

/// An append-only "Load More" list, as the customer menu shows it.
///
/// The first page replaces whatever was shown, later pages are appended.
/// `has_more` stays true until a fetched page comes back empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed<T> {
  items: Vec<T>,
  limit: u32,
  loaded_pages: u32,
  has_more: bool,
  loading: bool,
}

impl<T> Feed<T> {
  pub fn new(limit: u32) -> Self {
    Self {
      items: Vec::new(),
      limit: limit.max(1),
      loaded_pages: 0,
      has_more: true,
      loading: false,
    }
  }

  pub fn items(&self) -> &[T] {
    &self.items
  }

  pub fn limit(&self) -> u32 {
    self.limit
  }

  pub fn has_more(&self) -> bool {
    self.has_more
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  /// Whether the "Load More" button is offered.
  pub fn can_load_more(&self) -> bool {
    self.has_more && !self.loading
  }

  /// Marks a reload from page 1 as in flight and returns that page.
  pub fn begin_reload(&mut self) -> u32 {
    self.loading = true;
    1
  }

  /// Marks the next page as in flight, or `None` when there is nothing more
  /// or a load is already running.
  pub fn begin_load_more(&mut self) -> Option<u32> {
    if !self.can_load_more() {
      return None;
    }
    self.loading = true;
    Some(self.loaded_pages + 1)
  }

  /// Applies the rows fetched for `page`.
  pub fn apply(&mut self, page: u32, rows: Vec<T>) {
    self.loading = false;
    self.has_more = !rows.is_empty();
    if page <= 1 {
      self.items = rows;
      self.loaded_pages = 1;
    } else {
      self.items.extend(rows);
      self.loaded_pages = page;
    }
  }

  /// A failed fetch only ends the loading state.
  pub fn fail(&mut self) {
    self.loading = false;
  }
}
