// cafe-storefront/src/flows/contexts.rs

//! Data the flows run over. Handlers receive these wrapped in `Shared`.

use crate::services::{OrderService, UserService};
use crate::state::SessionContext;
use cafe_core::{Buyer, Credentials, NewOrder, Registration, Session};
use std::sync::Arc;

pub struct CheckoutData {
  pub orders: Arc<dyn OrderService>,
  pub session: SessionContext,
  pub buyer: Option<Buyer>,
  /// The snapshot that was (or is about to be) submitted.
  pub order: Option<NewOrder>,
  pub submitted: bool,
}

impl CheckoutData {
  pub fn new(orders: Arc<dyn OrderService>, session: SessionContext) -> Self {
    Self {
      orders,
      session,
      buyer: None,
      order: None,
      submitted: false,
    }
  }
}

pub struct SigninData {
  pub users: Arc<dyn UserService>,
  pub session: SessionContext,
  pub credentials: Credentials,
  pub signed_in: Option<Session>,
}

impl SigninData {
  pub fn new(users: Arc<dyn UserService>, session: SessionContext, credentials: Credentials) -> Self {
    Self {
      users,
      session,
      credentials,
      signed_in: None,
    }
  }
}

pub struct SignupData {
  pub users: Arc<dyn UserService>,
  pub registration: Registration,
  pub registered: bool,
}

impl SignupData {
  pub fn new(users: Arc<dyn UserService>, registration: Registration) -> Self {
    Self {
      users,
      registration,
      registered: false,
    }
  }
}
