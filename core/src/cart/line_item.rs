// cafe-core/src/cart/line_item.rs

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::line_total;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product + quantity entry of a cart.
///
/// On the wire it is the product object with a `qty` field, which is also
/// how order items come back from the Order Service. Inside a `Cart` the
/// quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
  #[serde(rename = "_id")]
  product_id: ProductId,
  product_name: String,
  #[serde(default)]
  description: String,
  #[serde(with = "rust_decimal::serde::float")]
  price: Decimal,
  #[serde(default)]
  img_url: String,
  qty: u32,
}

impl LineItem {
  /// A fresh line with quantity 1.
  pub(crate) fn from_product(product: &Product) -> Self {
    Self {
      product_id: product.id.clone(),
      product_name: product.product_name.clone(),
      description: product.description.clone(),
      price: product.price,
      img_url: product.img_url.clone(),
      qty: 1,
    }
  }

  pub fn product_id(&self) -> &ProductId {
    &self.product_id
  }

  pub fn product_name(&self) -> &str {
    &self.product_name
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn unit_price(&self) -> Decimal {
    self.price
  }

  pub fn img_url(&self) -> &str {
    &self.img_url
  }

  pub fn quantity(&self) -> u32 {
    self.qty
  }

  pub fn line_total(&self) -> Option<Decimal> {
    line_total(self.price, self.qty)
  }

  pub(crate) fn set_quantity(&mut self, qty: u32) {
    self.qty = qty;
  }
}
