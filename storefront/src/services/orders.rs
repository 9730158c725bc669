// cafe-storefront/src/services/orders.rs

use super::ListQuery;
use crate::api::ApiClient;
use crate::errors::Result;
use async_trait::async_trait;
use cafe_core::{NewOrder, Order, OrderId, Page, StatusUpdate};
use mockall::automock;
use reqwest::Method;
use tracing::instrument;

#[automock]
#[async_trait]
pub trait OrderService: Send + Sync {
  /// `POST /api/orders`; the response body is not used.
  async fn place_order(&self, order: NewOrder) -> Result<()>;

  /// `GET /api/orders/:email`, a buyer's own orders.
  async fn orders_for(&self, email: String) -> Result<Vec<Order>>;

  /// `GET /api/orders` (admin).
  async fn list_orders(&self, query: ListQuery, token: String) -> Result<Page<Order>>;

  /// `PATCH /api/orders/:id` (admin).
  async fn update_status(&self, id: OrderId, update: StatusUpdate, token: String) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct HttpOrderService {
  api: ApiClient,
}

impl HttpOrderService {
  pub fn new(api: ApiClient) -> Self {
    Self { api }
  }
}

#[async_trait]
impl OrderService for HttpOrderService {
  #[instrument(
    name = "orders::place_order",
    skip_all,
    fields(user_id = %order.user_id, lines = order.items.len(), order_value = %order.order_value),
    err(Display)
  )]
  async fn place_order(&self, order: NewOrder) -> Result<()> {
    let url = self.api.endpoint(&["api", "orders"])?;
    self.api.send_json(Method::POST, url, &order, None).await
  }

  #[instrument(name = "orders::orders_for", skip(self), err(Display))]
  async fn orders_for(&self, email: String) -> Result<Vec<Order>> {
    let url = self.api.endpoint(&["api", "orders", &email])?;
    self.api.get_json(url, &[], None).await
  }

  #[instrument(name = "orders::list_orders", skip(self, token), err(Display))]
  async fn list_orders(&self, query: ListQuery, token: String) -> Result<Page<Order>> {
    let url = self.api.endpoint(&["api", "orders"])?;
    self.api.get_json(url, &query, Some(&token)).await
  }

  #[instrument(name = "orders::update_status", skip(self, token), fields(status = %update.status), err(Display))]
  async fn update_status(&self, id: OrderId, update: StatusUpdate, token: String) -> Result<()> {
    let url = self.api.endpoint(&["api", "orders", id.as_str()])?;
    self.api.send_json(Method::PATCH, url, &update, Some(&token)).await
  }
}
