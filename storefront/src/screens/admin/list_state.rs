// cafe-storefront/src/screens/admin/list_state.rs

use crate::errors::Result;
use crate::services::ListQuery;
use cafe_core::{ListFilter, Notice, NoticeBoard, Page, Pager, Shared};
use std::future::Future;
use tracing::{debug, warn};

/// What every admin table holds: paging position, current rows and flags.
#[derive(Debug)]
pub struct ListState<F: ListFilter, T> {
  pub pager: Pager<F>,
  pub rows: Vec<T>,
  pub loading: bool,
  /// A create/update/delete is in flight; paging is disabled meanwhile.
  pub mutating: bool,
  pub notices: NoticeBoard,
}

impl<F: ListFilter, T> ListState<F, T> {
  pub fn new(limit: u32, page_sizes: &'static [u32]) -> Self {
    Self {
      pager: Pager::new(limit, page_sizes),
      rows: Vec::new(),
      loading: false,
      mutating: false,
      notices: NoticeBoard::sticky(),
    }
  }

  /// Takes a fetched page. Returns `true` when the page had to be pulled
  /// back because the list shrank, meaning another fetch is needed.
  pub fn apply(&mut self, page: Page<T>) -> bool {
    self.loading = false;
    self.rows = page.rows;
    self.pager.apply_total(page.total)
  }

  pub fn can_go_next(&self) -> bool {
    self.pager.has_next() && !self.mutating
  }

  pub fn can_go_prev(&self) -> bool {
    self.pager.has_prev() && !self.mutating
  }
}

/// Fetches the current page through `fetch` and stores it in `list`.
///
/// A failed fetch always shows `load_error`; the server text only goes to
/// the log.
///
/// At most two requests: the second only when the total shrank below the
/// current page.
pub(crate) async fn refresh_list<F, T, Fut>(
  list: &Shared<ListState<F, T>>,
  load_error: &str,
  fetch: impl Fn(ListQuery) -> Fut,
) -> Result<()>
where
  F: ListFilter,
  T: Send + Sync + 'static,
  Fut: Future<Output = Result<Page<T>>>,
{
  for _ in 0..2 {
    let query = list.update(|l| {
      l.loading = true;
      l.pager.query()
    });
    match fetch(query).await {
      Ok(page) => {
        let total = page.total;
        if !list.update(|l| l.apply(page)) {
          return Ok(());
        }
        debug!(total, "Current page no longer exists, fetching the last page.");
      }
      Err(err) => {
        warn!(error = %err, "List fetch failed.");
        list.update(|l| {
          l.loading = false;
          l.notices.error(load_error);
        });
        return Err(err);
      }
    }
  }
  Ok(())
}

/// The list's visible notice, if any.
pub(crate) fn current_notice<F: ListFilter, T: Send + Sync + 'static>(list: &Shared<ListState<F, T>>) -> Option<Notice> {
  list.read().notices.current().cloned()
}
