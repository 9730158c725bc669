// cafe-storefront/src/screens/login.rs

use crate::errors::Result;
use crate::flows::run_signin;
use crate::state::AppState;
use cafe_core::{Credentials, Notice, NoticeBoard, Session, Shared};
use tracing::instrument;

#[derive(Debug)]
struct LoginForm {
  credentials: Credentials,
  submitting: bool,
  notices: NoticeBoard,
}

#[derive(Debug, Clone)]
pub struct LoginScreen {
  app: AppState,
  form: Shared<LoginForm>,
}

impl LoginScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      form: Shared::new(LoginForm {
        credentials: Credentials::default(),
        submitting: false,
        notices: NoticeBoard::sticky(),
      }),
    }
  }

  pub fn set_email(&self, email: impl Into<String>) {
    let email = email.into();
    self.form.update(|f| f.credentials.email = email);
  }

  pub fn set_password(&self, password: impl Into<String>) {
    let password = password.into();
    self.form.update(|f| f.credentials.password = password);
  }

  /// Signs in; the session lands in the shared context on success.
  #[instrument(name = "login::submit", skip(self), err(Display))]
  pub async fn submit(&self) -> Result<Session> {
    let credentials = self.form.update(|f| {
      f.submitting = true;
      f.notices.dismiss();
      f.credentials.clone()
    });
    let result = run_signin(&self.app, credentials).await;
    self.form.update(|f| {
      f.submitting = false;
      match &result {
        Ok(_) => {
          f.credentials.password.clear();
          f.notices.success("Login successful! Redirecting...");
        }
        Err(err) => f.notices.error(err.user_message("Invalid email or password")),
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
