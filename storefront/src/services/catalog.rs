// cafe-storefront/src/services/catalog.rs

use super::ListQuery;
use crate::api::ApiClient;
use crate::errors::Result;
use async_trait::async_trait;
use cafe_core::{Page, Product, ProductId, ProductPayload};
use mockall::automock;
use reqwest::Method;
use tracing::instrument;

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
  /// `GET /api/products`
  async fn list_products(&self, query: ListQuery, token: Option<String>) -> Result<Page<Product>>;

  /// `POST /api/products`
  async fn create_product(&self, payload: ProductPayload, token: Option<String>) -> Result<()>;

  /// `PATCH /api/products/:id`
  async fn update_product(&self, id: ProductId, payload: ProductPayload, token: Option<String>) -> Result<()>;

  /// `DELETE /api/products/:id`
  async fn delete_product(&self, id: ProductId, token: Option<String>) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogService {
  api: ApiClient,
}

impl HttpCatalogService {
  pub fn new(api: ApiClient) -> Self {
    Self { api }
  }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
  #[instrument(name = "catalog::list_products", skip(self, token), err(Display))]
  async fn list_products(&self, query: ListQuery, token: Option<String>) -> Result<Page<Product>> {
    let url = self.api.endpoint(&["api", "products"])?;
    self.api.get_json(url, &query, token.as_deref()).await
  }

  #[instrument(name = "catalog::create_product", skip_all, fields(product = %payload.product_name), err(Display))]
  async fn create_product(&self, payload: ProductPayload, token: Option<String>) -> Result<()> {
    let url = self.api.endpoint(&["api", "products"])?;
    self.api.send_json(Method::POST, url, &payload, token.as_deref()).await
  }

  #[instrument(name = "catalog::update_product", skip(self, payload, token), err(Display))]
  async fn update_product(&self, id: ProductId, payload: ProductPayload, token: Option<String>) -> Result<()> {
    let url = self.api.endpoint(&["api", "products", id.as_str()])?;
    self.api.send_json(Method::PATCH, url, &payload, token.as_deref()).await
  }

  #[instrument(name = "catalog::delete_product", skip(self, token), err(Display))]
  async fn delete_product(&self, id: ProductId, token: Option<String>) -> Result<()> {
    let url = self.api.endpoint(&["api", "products", id.as_str()])?;
    self.api.delete(url, token.as_deref()).await
  }
}
