// cafe-storefront/src/services/mod.rs

//! Seams to the backend services.
//!
//! Each service is an `async_trait` trait (with a `mockall` mock for tests)
//! plus an `Http*` implementation over `ApiClient`. Screens and flows only
//! ever see `Arc<dyn ...Service>`.

pub mod catalog;
pub mod orders;
pub mod users;

pub use catalog::{CatalogService, HttpCatalogService, MockCatalogService};
pub use orders::{HttpOrderService, MockOrderService, OrderService};
pub use users::{HttpUserService, MockUserService, UserService};

/// `page`, `limit` and filter parameters of a list request.
pub type ListQuery = Vec<(&'static str, String)>;
