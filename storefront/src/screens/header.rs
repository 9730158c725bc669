// cafe-storefront/src/screens/header.rs

use crate::state::SessionContext;

/// What the top bar shows. Rebuilt from the session whenever it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
  /// Distinct lines in the cart.
  pub cart_count: usize,
  pub signed_in: bool,
  pub show_admin_link: bool,
  pub display_name: Option<String>,
}

impl HeaderView {
  pub fn from_session(session: &SessionContext) -> Self {
    let user = session.current().filter(|s| s.is_authenticated());
    let display_name = user.as_ref().map(|s| {
      if s.first_name.trim().is_empty() {
        s.email.clone()
      } else {
        s.first_name.clone()
      }
    });
    Self {
      cart_count: session.cart_count(),
      signed_in: user.is_some(),
      show_admin_link: user.as_ref().is_some_and(|s| s.is_admin()),
      display_name,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{product, session};
  use cafe_core::Role;

  #[test]
  fn badge_and_admin_link() {
    let ctx = SessionContext::new();
    let anon = HeaderView::from_session(&ctx);
    assert!(!anon.signed_in);
    assert_eq!(anon.cart_count, 0);

    ctx.cart().write().add(&product("p1", "2.00")).unwrap();
    ctx.cart().write().add(&product("p2", "3.00")).unwrap();
    ctx.cart().write().increment(&cafe_core::ProductId::new("p1")).unwrap();
    ctx.sign_in(session(Role::User));
    let user = HeaderView::from_session(&ctx);
    assert_eq!(user.cart_count, 2);
    assert!(!user.show_admin_link);
    assert_eq!(user.display_name.as_deref(), Some("Ash"));

    ctx.sign_in(session(Role::Admin));
    assert!(HeaderView::from_session(&ctx).show_admin_link);
  }
}
