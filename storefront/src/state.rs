// cafe-storefront/src/state.rs

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::flows::Flows;
use crate::services::{CatalogService, HttpCatalogService, HttpOrderService, HttpUserService, OrderService, UserService};
use cafe_core::{Buyer, Cart, Session, Shared};
use std::sync::Arc;
use tracing::info;

/// Per-session state every screen shares: who is signed in, and their cart.
///
/// Both halves are `Shared` handles, so clones of a `SessionContext` see the
/// same user and the same cart.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
  user: Shared<Option<Session>>,
  cart: Shared<Cart>,
}

impl SessionContext {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cart(&self) -> &Shared<Cart> {
    &self.cart
  }

  pub fn current(&self) -> Option<Session> {
    self.user.snapshot()
  }

  pub fn sign_in(&self, session: Session) {
    info!(user_id = %session.id, role = session.role.as_str(), "Session started.");
    *self.user.write() = Some(session);
  }

  /// Forgets the signed-in user. The cart is left as it is.
  pub fn sign_out(&self) {
    if self.user.write().take().is_some() {
      info!("Session ended.");
    }
  }

  pub fn is_authenticated(&self) -> bool {
    self.user.read().as_ref().is_some_and(Session::is_authenticated)
  }

  pub fn is_admin(&self) -> bool {
    self.user.read().as_ref().is_some_and(|s| s.is_authenticated() && s.is_admin())
  }

  pub fn bearer_token(&self) -> Option<String> {
    self
      .user
      .read()
      .as_ref()
      .filter(|s| s.is_authenticated())
      .map(|s| s.token.clone())
  }

  pub fn buyer(&self) -> Option<Buyer> {
    self
      .user
      .read()
      .as_ref()
      .filter(|s| s.is_authenticated())
      .map(Session::buyer)
  }

  /// Token of a signed-in administrator, for the admin screens.
  pub fn admin_token(&self) -> Result<String> {
    let guard = self.user.read();
    match guard.as_ref() {
      Some(s) if s.is_authenticated() && s.is_admin() => Ok(s.token.clone()),
      Some(s) if s.is_authenticated() => Err(AppError::Auth("Administrator access required".to_string())),
      _ => Err(AppError::Auth("Please log in to continue".to_string())),
    }
  }

  /// Number of distinct lines in the cart (the header badge).
  pub fn cart_count(&self) -> usize {
    self.cart.read().len()
  }
}

/// Everything a screen needs: config, service handles, flows and the session.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub catalog: Arc<dyn CatalogService>,
  pub orders: Arc<dyn OrderService>,
  pub users: Arc<dyn UserService>,
  pub flows: Arc<Flows>,
  pub session: SessionContext,
}

impl AppState {
  /// Wires the HTTP service clients for `config.api_url`.
  pub fn new(config: AppConfig) -> Result<Self> {
    let api = ApiClient::new(&config)?;
    Ok(Self::with_services(
      config,
      Arc::new(HttpCatalogService::new(api.clone())),
      Arc::new(HttpOrderService::new(api.clone())),
      Arc::new(HttpUserService::new(api)),
    ))
  }

  /// Wires the given services, e.g. mocks in tests.
  pub fn with_services(
    config: AppConfig,
    catalog: Arc<dyn CatalogService>,
    orders: Arc<dyn OrderService>,
    users: Arc<dyn UserService>,
  ) -> Self {
    Self {
      config: Arc::new(config),
      catalog,
      orders,
      users,
      flows: Arc::new(Flows::build()),
      session: SessionContext::new(),
    }
  }
}

impl std::fmt::Debug for AppState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppState")
      .field("config", &self.config)
      .field("session", &self.session)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{product, session};
  use cafe_core::Role;

  #[test]
  fn clones_share_user_and_cart() {
    let a = SessionContext::new();
    let b = a.clone();
    b.sign_in(session(Role::User));
    assert!(a.is_authenticated());
    assert!(!a.is_admin());
    assert_eq!(a.bearer_token().as_deref(), Some("tok"));
    assert!(a.cart().ptr_eq(b.cart()));
  }

  #[test]
  fn admin_token_requires_admin_role() {
    let ctx = SessionContext::new();
    assert!(matches!(ctx.admin_token(), Err(AppError::Auth(_))));
    ctx.sign_in(session(Role::User));
    assert!(matches!(ctx.admin_token(), Err(AppError::Auth(m)) if m == "Administrator access required"));
    ctx.sign_in(session(Role::Admin));
    assert_eq!(ctx.admin_token().unwrap(), "tok");
  }

  #[test]
  fn sign_out_keeps_cart() {
    let ctx = SessionContext::new();
    ctx.sign_in(session(Role::User));
    ctx.cart().write().add(&product("p1", "4.50")).unwrap();
    ctx.sign_out();
    assert!(ctx.current().is_none());
    assert!(ctx.buyer().is_none());
    assert_eq!(ctx.cart_count(), 1);
  }
}
