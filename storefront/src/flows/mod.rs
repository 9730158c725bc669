// cafe-storefront/src/flows/mod.rs

//! Multi-step user actions built on the `cafe_core` flow engine.

use crate::errors::AppError;
use cafe_core::Flow;

pub mod contexts;

pub mod checkout_flow;
pub mod signin_flow;
pub mod signup_flow;

pub use checkout_flow::run_checkout;
pub use signin_flow::run_signin;
pub use signup_flow::run_signup;

/// The flows of the application, built once at startup.
pub struct Flows {
  pub checkout: Flow<contexts::CheckoutData, AppError>,
  pub signin: Flow<contexts::SigninData, AppError>,
  pub signup: Flow<contexts::SignupData, AppError>,
}

impl Flows {
  pub fn build() -> Self {
    tracing::debug!("Building application flows...");
    Self {
      checkout: checkout_flow::build_checkout_flow(),
      signin: signin_flow::build_signin_flow(),
      signup: signup_flow::build_signup_flow(),
    }
  }
}
