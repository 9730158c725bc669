// cafe-storefront/src/screens/cart.rs

use crate::errors::Result;
use crate::flows::run_checkout;
use crate::state::AppState;
use cafe_core::{Decrement, LineItem, NewOrder, Notice, NoticeBoard, ProductId, Shared};
use rust_decimal::Decimal;
use tracing::instrument;

#[derive(Debug)]
struct CartView {
  placing_order: bool,
  notices: NoticeBoard,
}

/// The cart page. Lines live in the session cart; this screen only adds
/// the order-in-flight flag and the error line.
#[derive(Debug, Clone)]
pub struct CartScreen {
  app: AppState,
  view: Shared<CartView>,
}

impl CartScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      view: Shared::new(CartView {
        placing_order: false,
        notices: NoticeBoard::sticky(),
      }),
    }
  }

  pub fn items(&self) -> Vec<LineItem> {
    self.app.session.cart().read().items().to_vec()
  }

  pub fn total(&self) -> Decimal {
    self.app.session.cart().read().total()
  }

  pub fn is_empty(&self) -> bool {
    self.app.session.cart().read().is_empty()
  }

  pub fn increment(&self, product_id: &ProductId) -> Result<u32> {
    Ok(self.app.session.cart().write().increment(product_id)?)
  }

  /// One less; the line goes away when it was the last one.
  pub fn decrement(&self, product_id: &ProductId) -> Result<Decrement> {
    Ok(self.app.session.cart().write().decrement(product_id)?)
  }

  pub fn remove(&self, product_id: &ProductId) -> Result<LineItem> {
    Ok(self.app.session.cart().write().remove(product_id)?)
  }

  /// Places the cart as an order. On success the cart is empty; on failure
  /// it is untouched and the reason is shown.
  #[instrument(name = "cart::place_order", skip(self), err(Display))]
  pub async fn place_order(&self) -> Result<NewOrder> {
    self.view.update(|v| {
      v.placing_order = true;
      v.notices.dismiss();
    });
    let result = run_checkout(&self.app).await;
    self.view.update(|v| {
      v.placing_order = false;
      if let Err(err) = &result {
        v.notices.error(err.user_message("Failed to place order"));
      }
    });
    result
  }

  pub fn is_placing_order(&self) -> bool {
    self.view.read().placing_order
  }

  pub fn notice(&self) -> Option<Notice> {
    self.view.read().notices.current().cloned()
  }
}
