// cafe-core/src/cart/mod.rs

//! The cart model: an insertion-ordered set of line items keyed by product id.
//!
//! Rules:
//! - adding a product that is already in the cart is a conflict and changes nothing;
//! - a quantity that would drop to 0 removes the line instead;
//! - `total()` is summed from the current lines on every call;
//! - a change whose total would not fit in a `Decimal` is refused, so `total()` never overflows.

mod line_item;

pub use line_item::LineItem;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::checked_sum;
use crate::order::{Buyer, NewOrder};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
  /// The user-facing conflict for a duplicate add.
  #[error("Product already in cart")]
  AlreadyInCart { product_id: ProductId },

  #[error("Product {product_id} is not in the cart")]
  NotInCart { product_id: ProductId },

  #[error("Product {product_id} has a negative price")]
  NegativePrice { product_id: ProductId },

  #[error("Quantity limit reached for product {product_id}")]
  QuantityOverflow { product_id: ProductId },

  #[error("Cart total is too large")]
  TotalOverflow { product_id: ProductId },

  #[error("Your cart is empty")]
  Empty,
}

/// Result of `Cart::decrement`.
#[derive(Debug, Clone, PartialEq)]
pub enum Decrement {
  /// The line is still there with this quantity.
  Remaining(u32),
  /// The quantity reached zero and the line was dropped.
  Removed(LineItem),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
  items: Vec<LineItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  fn index_of(&self, product_id: &ProductId) -> Option<usize> {
    self.items.iter().position(|item| item.product_id() == product_id)
  }

  fn checked_total(&self) -> Option<Decimal> {
    checked_sum(self.items.iter().map(LineItem::line_total))
  }

  fn line_mut(&mut self, product_id: &ProductId) -> Result<&mut LineItem, CartError> {
    self
      .items
      .iter_mut()
      .find(|item| item.product_id() == product_id)
      .ok_or_else(|| CartError::NotInCart {
        product_id: product_id.clone(),
      })
  }

  /// Appends `product` with quantity 1.
  pub fn add(&mut self, product: &Product) -> Result<&LineItem, CartError> {
    if self.index_of(&product.id).is_some() {
      debug!(product_id = %product.id, "Duplicate add rejected.");
      return Err(CartError::AlreadyInCart {
        product_id: product.id.clone(),
      });
    }
    if product.price.is_sign_negative() && !product.price.is_zero() {
      return Err(CartError::NegativePrice {
        product_id: product.id.clone(),
      });
    }
    self.items.push(LineItem::from_product(product));
    if self.checked_total().is_none() {
      self.items.pop();
      debug!(product_id = %product.id, "Add rejected, total would overflow.");
      return Err(CartError::TotalOverflow {
        product_id: product.id.clone(),
      });
    }
    debug!(product_id = %product.id, lines = self.items.len(), "Line added.");
    let last = self.items.len() - 1;
    Ok(&self.items[last])
  }

  /// Adds one to the line's quantity and returns the new quantity.
  pub fn increment(&mut self, product_id: &ProductId) -> Result<u32, CartError> {
    let line = self.line_mut(product_id)?;
    let next = line.quantity().checked_add(1).ok_or_else(|| CartError::QuantityOverflow {
      product_id: product_id.clone(),
    })?;
    let previous = line.quantity();
    line.set_quantity(next);
    if self.checked_total().is_none() {
      self.line_mut(product_id)?.set_quantity(previous);
      return Err(CartError::TotalOverflow {
        product_id: product_id.clone(),
      });
    }
    Ok(next)
  }

  /// Takes one off the line's quantity, dropping the line at zero.
  pub fn decrement(&mut self, product_id: &ProductId) -> Result<Decrement, CartError> {
    let idx = self.index_of(product_id).ok_or_else(|| CartError::NotInCart {
      product_id: product_id.clone(),
    })?;
    let line = &mut self.items[idx];
    if line.quantity() <= 1 {
      let removed = self.items.remove(idx);
      debug!(product_id = %product_id, "Line removed at zero quantity.");
      return Ok(Decrement::Removed(removed));
    }
    let next = line.quantity() - 1;
    line.set_quantity(next);
    Ok(Decrement::Remaining(next))
  }

  pub fn remove(&mut self, product_id: &ProductId) -> Result<LineItem, CartError> {
    let idx = self.index_of(product_id).ok_or_else(|| CartError::NotInCart {
      product_id: product_id.clone(),
    })?;
    Ok(self.items.remove(idx))
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Σ unit price × quantity over the current lines.
  pub fn total(&self) -> Decimal {
    // add/increment refuse any change that would make this overflow.
    self.checked_total().unwrap_or(Decimal::MAX)
  }

  pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
    self.items.iter().find(|item| item.product_id() == product_id)
  }

  pub fn contains(&self, product_id: &ProductId) -> bool {
    self.index_of(product_id).is_some()
  }

  pub fn items(&self) -> &[LineItem] {
    &self.items
  }

  /// Number of distinct lines (the header badge).
  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// The order body for checkout. The cart itself is not touched.
  pub fn snapshot(&self, buyer: &Buyer) -> Result<NewOrder, CartError> {
    if self.is_empty() {
      return Err(CartError::Empty);
    }
    Ok(NewOrder {
      user_id: buyer.user_id.clone(),
      email: buyer.email.clone(),
      order_value: self.total(),
      items: self.items.clone(),
    })
  }
}
