// cafe-core/src/order.rs

//! Orders: the checkout snapshot sent to the Order Service, orders as read
//! back, and the status lifecycle an administrator drives.

use crate::cart::LineItem;
use crate::ids::{OrderId, UserId};
use crate::money::checked_sum;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Who is buying; taken from the signed-in session at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buyer {
  pub user_id: UserId,
  pub email: String,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
  pub user_id: UserId,
  pub email: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub order_value: Decimal,
  pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
  #[error("Unknown order status '{0}'")]
  Unknown(String),

  #[error("Order is already {from} and cannot be marked {to}")]
  NotAllowed { from: OrderStatus, to: OrderStatus },
}

/// Order status as the backend spells it: `"Pending"`, `"completed"`,
/// `"cancelled"`. Parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
  Pending,
  Completed,
  Cancelled,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 3] = [OrderStatus::Pending, OrderStatus::Completed, OrderStatus::Cancelled];

  pub fn as_wire(self) -> &'static str {
    match self {
      OrderStatus::Pending => "Pending",
      OrderStatus::Completed => "completed",
      OrderStatus::Cancelled => "cancelled",
    }
  }

  /// Pending orders can be completed or cancelled; nothing else moves.
  pub fn can_transition_to(self, next: OrderStatus) -> bool {
    matches!(
      (self, next),
      (OrderStatus::Pending, OrderStatus::Completed) | (OrderStatus::Pending, OrderStatus::Cancelled)
    )
  }

  pub fn transition(self, next: OrderStatus) -> Result<OrderStatus, StatusError> {
    if self.can_transition_to(next) {
      Ok(next)
    } else {
      Err(StatusError::NotAllowed { from: self, to: next })
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_wire())
  }
}

impl FromStr for OrderStatus {
  type Err = StatusError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    OrderStatus::ALL
      .into_iter()
      .find(|status| status.as_wire().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| StatusError::Unknown(s.to_string()))
  }
}

impl Serialize for OrderStatus {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_wire())
  }
}

impl<'de> Deserialize<'de> for OrderStatus {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// Status filter of the admin orders list; `All` is sent as an empty value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
  #[default]
  All,
  Only(OrderStatus),
}

impl FromStr for StatusFilter {
  type Err = StatusError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
      Ok(StatusFilter::All)
    } else {
      trimmed.parse().map(StatusFilter::Only)
    }
  }
}

/// Body of `PATCH /api/orders/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
  pub status: OrderStatus,
}

/// An order as the Order Service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  #[serde(rename = "_id")]
  pub id: OrderId,
  #[serde(default)]
  pub user_id: Option<UserId>,
  #[serde(default)]
  pub email: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub order_value: Decimal,
  #[serde(default)]
  pub items: Vec<LineItem>,
  pub status: OrderStatus,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}

impl Order {
  pub fn reference(&self) -> String {
    self.id.reference()
  }

  /// Only pending orders get the complete/cancel actions.
  pub fn is_actionable(&self) -> bool {
    self.status == OrderStatus::Pending
  }

  /// Sum of the line totals; can be compared against `order_value`.
  /// `None` when the backend sent lines whose sum overflows.
  pub fn items_total(&self) -> Option<Decimal> {
    checked_sum(self.items.iter().map(LineItem::line_total))
  }
}
