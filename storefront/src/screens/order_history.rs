// cafe-storefront/src/screens/order_history.rs

use crate::errors::{AppError, Result};
use crate::state::AppState;
use cafe_core::{Notice, NoticeBoard, Order, Shared};
use tracing::instrument;

#[derive(Debug)]
struct HistoryState {
  orders: Vec<Order>,
  loading: bool,
  notices: NoticeBoard,
}

/// "My orders": the signed-in buyer's orders, newest as the service sends them.
#[derive(Debug, Clone)]
pub struct OrderHistoryScreen {
  app: AppState,
  state: Shared<HistoryState>,
}

impl OrderHistoryScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      state: Shared::new(HistoryState {
        orders: Vec::new(),
        loading: false,
        notices: NoticeBoard::sticky(),
      }),
    }
  }

  #[instrument(name = "order_history::load", skip(self), err(Display))]
  pub async fn load(&self) -> Result<()> {
    let email = self
      .app
      .session
      .current()
      .map(|s| s.email)
      .filter(|e| !e.is_empty())
      .ok_or_else(|| AppError::Auth("Please log in to see your orders".to_string()))?;

    self.state.update(|s| s.loading = true);
    let result = self.app.orders.orders_for(email).await;
    self.state.update(|s| {
      s.loading = false;
      match &result {
        Ok(orders) => {
          s.orders = orders.clone();
          s.notices.dismiss();
        }
        Err(_) => s.notices.error("Failed to load orders"),
      }
    });
    result.map(|_| ())
  }

  pub fn orders(&self) -> Vec<Order> {
    self.state.read().orders.clone()
  }

  /// True once loaded with nothing to show ("no orders yet").
  pub fn is_empty(&self) -> bool {
    let s = self.state.read();
    !s.loading && s.orders.is_empty()
  }

  pub fn is_loading(&self) -> bool {
    self.state.read().loading
  }

  pub fn notice(&self) -> Option<Notice> {
    self.state.read().notices.current().cloned()
  }
}
