// cafe-storefront/src/screens/admin/orders.rs

use super::list_state::{current_notice, refresh_list, ListState};
use crate::errors::{AppError, Result};
use crate::state::AppState;
use cafe_core::{Notice, Order, OrderId, OrderStatus, Shared, StatusFilter, StatusUpdate};
use tracing::{info, instrument};

pub const ORDER_PAGE_SIZES: &[u32] = &[3, 5, 10];
pub const DEFAULT_ORDER_PAGE_SIZE: u32 = 3;

const LOAD_ERROR: &str = "Failed to load orders";
const UPDATE_ERROR: &str = "Failed to update order";

/// Admin orders table: status filter, paging, complete/cancel actions.
#[derive(Debug, Clone)]
pub struct AdminOrdersScreen {
  app: AppState,
  list: Shared<ListState<StatusFilter, Order>>,
}

impl AdminOrdersScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      list: Shared::new(ListState::new(DEFAULT_ORDER_PAGE_SIZE, ORDER_PAGE_SIZES)),
    }
  }

  #[instrument(name = "admin_orders::refresh", skip(self), err(Display))]
  pub async fn refresh(&self) -> Result<()> {
    let token = self.app.session.admin_token()?;
    let orders = self.app.orders.clone();
    refresh_list(&self.list, LOAD_ERROR, |query| orders.list_orders(query, token.clone())).await
  }

  /// New status filter; back to page 1 and one fetch.
  pub async fn set_status_filter(&self, filter: StatusFilter) -> Result<()> {
    self.list.update(|l| l.pager.set_filter(filter));
    self.refresh().await
  }

  pub async fn set_limit(&self, limit: u32) -> Result<()> {
    self.list.update(|l| l.pager.set_limit(limit))?;
    self.refresh().await
  }

  pub async fn next_page(&self) -> Result<bool> {
    let moved = self.list.update(|l| l.can_go_next() && l.pager.next());
    if moved {
      self.refresh().await?;
    }
    Ok(moved)
  }

  pub async fn prev_page(&self) -> Result<bool> {
    let moved = self.list.update(|l| l.can_go_prev() && l.pager.prev());
    if moved {
      self.refresh().await?;
    }
    Ok(moved)
  }

  pub async fn mark_completed(&self, id: &OrderId) -> Result<()> {
    self.change_status(id, OrderStatus::Completed).await
  }

  pub async fn cancel(&self, id: &OrderId) -> Result<()> {
    self.change_status(id, OrderStatus::Cancelled).await
  }

  /// Only rows shown as Pending can move; the table is re-fetched afterwards.
  #[instrument(name = "admin_orders::change_status", skip(self), err(Display))]
  async fn change_status(&self, id: &OrderId, next: OrderStatus) -> Result<()> {
    let token = self.app.session.admin_token()?;
    let current = self
      .list
      .read()
      .rows
      .iter()
      .find(|o| &o.id == id)
      .map(|o| o.status)
      .ok_or_else(|| AppError::NotFound(format!("Order {} is not on this page", id.reference())))?;
    let status = current.transition(next)?;

    self.list.update(|l| l.mutating = true);
    let result = self
      .app
      .orders
      .update_status(id.clone(), StatusUpdate { status }, token)
      .await;
    self.list.update(|l| l.mutating = false);

    if let Err(err) = result {
      self.list.update(|l| l.notices.error(err.user_message(UPDATE_ERROR)));
      return Err(err);
    }
    info!(order = %id.reference(), %status, "Order status changed.");
    self.refresh().await
  }

  pub fn rows(&self) -> Vec<Order> {
    self.list.read().rows.clone()
  }

  pub fn status_filter(&self) -> StatusFilter {
    *self.list.read().pager.filter()
  }

  pub fn page(&self) -> u32 {
    self.list.read().pager.page()
  }

  pub fn limit(&self) -> u32 {
    self.list.read().pager.limit()
  }

  pub fn total_pages(&self) -> u32 {
    self.list.read().pager.total_pages()
  }

  pub fn has_next(&self) -> bool {
    self.list.read().can_go_next()
  }

  pub fn has_prev(&self) -> bool {
    self.list.read().can_go_prev()
  }

  pub fn is_loading(&self) -> bool {
    self.list.read().loading
  }

  pub fn notice(&self) -> Option<Notice> {
    current_notice(&self.list)
  }
}
