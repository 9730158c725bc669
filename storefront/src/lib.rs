// cafe-storefront/src/lib.rs

//! Café storefront: service clients, flows and headless screens over the
//! `cafe_core` domain model.

pub mod api;
pub mod config;
pub mod errors;
pub mod flows;
pub mod screens;
pub mod services;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::{AppState, SessionContext};
