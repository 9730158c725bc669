// cafe-storefront/src/screens/profile.rs

use crate::errors::{AppError, Result};
use crate::state::AppState;
use cafe_core::{Notice, NoticeBoard, Profile, ProfileUpdate, Shared};
use tracing::{info, instrument};

#[derive(Debug)]
struct ProfileState {
  profile: Option<Profile>,
  form: ProfileUpdate,
  submitting: bool,
  notices: NoticeBoard,
}

/// The signed-in user's profile page: view, edit, log out.
#[derive(Debug, Clone)]
pub struct ProfileScreen {
  app: AppState,
  state: Shared<ProfileState>,
}

impl ProfileScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      state: Shared::new(ProfileState {
        profile: None,
        form: ProfileUpdate::default(),
        submitting: false,
        notices: NoticeBoard::sticky(),
      }),
    }
  }

  /// Fetches the profile and fills the form from it.
  #[instrument(name = "profile::load", skip(self), err(Display))]
  pub async fn load(&self) -> Result<()> {
    let user_id = self
      .app
      .session
      .current()
      .map(|s| s.id)
      .ok_or_else(|| AppError::Auth("Please log in to continue".to_string()))?;

    match self.app.users.profile(user_id).await {
      Ok(profile) => {
        self.state.update(|s| {
          s.form = ProfileUpdate::from_profile(&profile);
          s.profile = Some(profile);
        });
        Ok(())
      }
      Err(err) => {
        self.state.update(|s| s.notices.error("Failed to load profile data"));
        Err(err)
      }
    }
  }

  pub fn edit(&self, f: impl FnOnce(&mut ProfileUpdate)) {
    self.state.update(|s| f(&mut s.form));
  }

  /// Saves the form against the loaded profile, then loads it again.
  #[instrument(name = "profile::submit", skip(self), err(Display))]
  pub async fn submit(&self) -> Result<()> {
    let (profile_id, form) = {
      let s = self.state.read();
      let id = s.profile.as_ref().map(|p| p.id.clone());
      (id, s.form.clone())
    };
    let profile_id = profile_id.ok_or_else(|| AppError::Validation("Profile is not loaded yet".to_string()))?;

    if let Err(e) = form.validate() {
      let err = AppError::from(e);
      self.state.update(|s| s.notices.error(err.user_message("Update failed")));
      return Err(err);
    }

    self.state.update(|s| {
      s.submitting = true;
      s.notices.dismiss();
    });
    let result = self.app.users.update_profile(profile_id, form).await;
    self.state.update(|s| s.submitting = false);

    match result {
      Ok(()) => {
        info!("Profile updated.");
        self.state.update(|s| s.notices.success("Profile updated successfully!"));
        self.load().await
      }
      Err(err) => {
        self.state.update(|s| s.notices.error(err.user_message("Update failed")));
        Err(err)
      }
    }
  }

  /// Ends the session. The cart is kept.
  pub fn logout(&self) {
    self.app.session.sign_out();
    self.state.update(|s| {
      s.profile = None;
      s.form = ProfileUpdate::default();
    });
  }

  pub fn profile(&self) -> Option<Profile> {
    self.state.read().profile.clone()
  }

  pub fn form(&self) -> ProfileUpdate {
    self.state.read().form.clone()
  }

  pub fn is_submitting(&self) -> bool {
    self.state.read().submitting
  }

  pub fn notice(&self) -> Option<Notice> {
    self.state.read().notices.current().cloned()
  }
}
