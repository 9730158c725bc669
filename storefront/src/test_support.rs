// cafe-storefront/src/test_support.rs

//! Fixtures shared by the unit tests of this crate.

use crate::config::AppConfig;
use crate::services::{MockCatalogService, MockOrderService, MockUserService};
use crate::state::AppState;
use cafe_core::{Order, OrderId, OrderStatus, Product, ProductId, Role, Session, UserId};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use url::Url;

pub fn config() -> AppConfig {
  // Port 9 is discard; nothing in unit tests should reach the network.
  AppConfig::new(Url::parse("http://127.0.0.1:9/").unwrap())
}

pub fn session(role: Role) -> Session {
  Session {
    id: UserId::new("u1"),
    email: "ash@cafe.com".into(),
    first_name: "Ash".into(),
    last_name: "Grey".into(),
    role,
    token: "tok".into(),
  }
}

pub fn product(id: &str, price: &str) -> Product {
  Product {
    id: ProductId::new(id),
    product_name: format!("Product {id}"),
    description: "House special".into(),
    price: Decimal::from_str(price).unwrap(),
    img_url: format!("https://img.example/{id}.png"),
  }
}

pub fn order(id: &str, status: OrderStatus) -> Order {
  Order {
    id: OrderId::new(id),
    user_id: Some(UserId::new("u1")),
    email: "ash@cafe.com".into(),
    order_value: Decimal::new(500, 2),
    items: Vec::new(),
    status,
    created_at: None,
  }
}

/// State over the given mocks. Expectations must be set before calling this.
pub fn state_with(catalog: MockCatalogService, orders: MockOrderService, users: MockUserService) -> AppState {
  AppState::with_services(config(), Arc::new(catalog), Arc::new(orders), Arc::new(users))
}

/// State whose services must never be called.
pub fn offline_state() -> AppState {
  state_with(MockCatalogService::new(), MockOrderService::new(), MockUserService::new())
}
