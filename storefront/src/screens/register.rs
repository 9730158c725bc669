// cafe-storefront/src/screens/register.rs

use crate::errors::Result;
use crate::flows::run_signup;
use crate::state::AppState;
use cafe_core::{Notice, NoticeBoard, Registration, Shared};
use tracing::instrument;

#[derive(Debug)]
struct RegisterForm {
  registration: Registration,
  submitting: bool,
  notices: NoticeBoard,
}

#[derive(Debug, Clone)]
pub struct RegisterScreen {
  app: AppState,
  form: Shared<RegisterForm>,
}

impl RegisterScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      form: Shared::new(RegisterForm {
        registration: Registration::default(),
        submitting: false,
        notices: NoticeBoard::sticky(),
      }),
    }
  }

  pub fn edit(&self, f: impl FnOnce(&mut Registration)) {
    self.form.update(|form| f(&mut form.registration));
  }

  /// Creates the account. Signing in is a separate step afterwards.
  #[instrument(name = "register::submit", skip(self), err(Display))]
  pub async fn submit(&self) -> Result<()> {
    let registration = self.form.update(|f| {
      f.submitting = true;
      f.notices.dismiss();
      f.registration.clone()
    });
    let result = run_signup(&self.app, registration).await;
    self.form.update(|f| {
      f.submitting = false;
      match &result {
        Ok(()) => {
          f.registration = Registration::default();
          f.notices.success("Registration successful! Redirecting to login...");
        }
        Err(err) => f.notices.error(err.user_message("Registration failed. Please try again.")),
      }
    });
    result
  }

  pub fn is_submitting(&self) -> bool {
    self.form.read().submitting
  }

  pub fn notice(&self) -> Option<Notice> {
    self.form.read().notices.current().cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::AppError;
  use crate::services::{MockCatalogService, MockOrderService, MockUserService};
  use crate::test_support::{offline_state, state_with};

  fn fill(r: &mut Registration) {
    r.first_name = "Ash".into();
    r.last_name = "Roast".into();
    r.email = "ash@cafe.com".into();
    r.password = "secret1".into();
  }

  #[tokio::test]
  async fn registers_and_clears_form() {
    let mut users = MockUserService::new();
    users
      .expect_register()
      .withf(|r| r.email == "ash@cafe.com")
      .times(1)
      .returning(|_| Ok(()));
    let screen = RegisterScreen::new(state_with(MockCatalogService::new(), MockOrderService::new(), users));
    screen.edit(fill);
    screen.submit().await.unwrap();
    assert_eq!(
      screen.notice().unwrap().text,
      "Registration successful! Redirecting to login..."
    );
  }

  #[tokio::test]
  async fn short_password_is_caught_locally() {
    let screen = RegisterScreen::new(offline_state());
    screen.edit(|r| {
      fill(r);
      r.password = "123".into();
    });
    assert!(matches!(screen.submit().await, Err(AppError::Validation(_))));
    assert_eq!(screen.notice().unwrap().text, "Password must be at least 6 characters");
  }

  #[tokio::test]
  async fn server_failure_without_message_uses_fallback() {
    let mut users = MockUserService::new();
    users.expect_register().times(1).returning(|_| {
      Err(AppError::Api {
        status: 500,
        message: Some("   ".into()),
      })
    });
    let screen = RegisterScreen::new(state_with(MockCatalogService::new(), MockOrderService::new(), users));
    screen.edit(fill);
    assert!(screen.submit().await.is_err());
    assert_eq!(screen.notice().unwrap().text, "Registration failed. Please try again.");
  }
}
