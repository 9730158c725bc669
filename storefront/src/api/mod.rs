// cafe-storefront/src/api/mod.rs

//! HTTP plumbing shared by the service clients.

pub mod client;

pub use client::{ApiClient, REQUEST_ID_HEADER};
