// cafe-storefront/src/screens/mod.rs

//! Headless screen controllers.
//!
//! A screen holds its own view state behind `Shared` handles and gets the
//! session (user and cart) through the injected `AppState`. Clones of a
//! screen see the same state. Rendering is up to the caller; the `cafe`
//! binary prints to stdout.

pub mod admin;
pub mod cart;
pub mod header;
pub mod login;
pub mod menu;
pub mod order_history;
pub mod profile;
pub mod register;

pub use cart::CartScreen;
pub use header::HeaderView;
pub use login::LoginScreen;
pub use menu::MenuScreen;
pub use order_history::OrderHistoryScreen;
pub use profile::ProfileScreen;
pub use register::RegisterScreen;
