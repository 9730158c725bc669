// cafe-core/src/catalog.rs

//! Catalog schemas: products as the Catalog Service returns them and the
//! admin product form.

use crate::ids::ProductId;
use crate::money::has_cent_precision;
use crate::validation::{self, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A menu product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: ProductId,
  pub product_name: String,
  #[serde(default)]
  pub description: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  #[serde(default)]
  pub img_url: String,
}

/// The admin product form as typed. `price` stays text until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
  pub product_name: String,
  pub description: String,
  pub price: String,
  pub img_url: String,
}

/// Validated body of `POST /api/products` and `PATCH /api/products/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
  pub product_name: String,
  pub description: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub img_url: String,
}

impl ProductDraft {
  /// Form pre-filled from an existing row ("Edit").
  pub fn from_product(product: &Product) -> Self {
    Self {
      product_name: product.product_name.clone(),
      description: product.description.clone(),
      price: product.price.to_string(),
      img_url: product.img_url.clone(),
    }
  }

  pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
    let product_name = validation::required("Product name", &self.product_name)?.to_string();
    let description = validation::required("Description", &self.description)?.to_string();
    let price_text = validation::required("Price", &self.price)?;
    let price = Decimal::from_str(price_text).map_err(|_| ValidationError::InvalidNumber { field: "Price" })?;
    if price.is_sign_negative() && !price.is_zero() {
      return Err(ValidationError::NegativePrice);
    }
    if !has_cent_precision(price) {
      return Err(ValidationError::PriceTooPrecise);
    }
    let img_url = validation::absolute_url("Image URL", &self.img_url)?.to_string();

    Ok(ProductPayload {
      product_name,
      description,
      price,
      img_url,
    })
  }
}
