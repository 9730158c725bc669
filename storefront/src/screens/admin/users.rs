// cafe-storefront/src/screens/admin/users.rs

use super::form_state::FormState;
use super::list_state::{current_notice, refresh_list, ListState};
use crate::errors::{AppError, Result};
use crate::state::AppState;
use cafe_core::{FormMode, Notice, SearchFilter, Shared, UserDraft, UserId, UserRecord};
use tracing::{info, instrument, warn};

pub const USER_PAGE_SIZES: &[u32] = &[5, 10, 20];
pub const DEFAULT_USER_PAGE_SIZE: u32 = 5;

/// Admin users table with its add/edit form. Every call carries the admin's
/// bearer token.
#[derive(Debug, Clone)]
pub struct AdminUsersScreen {
  app: AppState,
  list: Shared<ListState<SearchFilter, UserRecord>>,
  form: Shared<FormState<UserDraft, UserId>>,
}

impl AdminUsersScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      list: Shared::new(ListState::new(DEFAULT_USER_PAGE_SIZE, USER_PAGE_SIZES)),
      form: Shared::default(),
    }
  }

  #[instrument(name = "admin_users::refresh", skip(self), err(Display))]
  pub async fn refresh(&self) -> Result<()> {
    let token = self.app.session.admin_token()?;
    let users = self.app.users.clone();
    refresh_list(&self.list, "Failed to load users", |query| users.list_users(query, token.clone())).await
  }

  pub async fn search(&self, text: &str) -> Result<()> {
    self.list.update(|l| l.pager.set_filter(SearchFilter::new(text)));
    self.refresh().await
  }

  pub async fn set_limit(&self, limit: u32) -> Result<()> {
    self.list.update(|l| l.pager.set_limit(limit))?;
    self.refresh().await
  }

  pub async fn next_page(&self) -> Result<bool> {
    let moved = self.list.update(|l| l.can_go_next() && l.pager.next());
    if moved {
      self.refresh().await?;
    }
    Ok(moved)
  }

  pub async fn prev_page(&self) -> Result<bool> {
    let moved = self.list.update(|l| l.can_go_prev() && l.pager.prev());
    if moved {
      self.refresh().await?;
    }
    Ok(moved)
  }

  pub fn begin_edit(&self, record: &UserRecord) {
    self
      .form
      .update(|f| f.begin_edit(record.id.clone(), UserDraft::from_record(record)));
  }

  pub fn cancel_edit(&self) {
    self.form.update(FormState::reset);
  }

  pub fn edit_form(&self, f: impl FnOnce(&mut UserDraft)) {
    self.form.update(|form| f(&mut form.draft));
  }

  pub fn form(&self) -> UserDraft {
    self.form.read().draft.clone()
  }

  pub fn form_mode(&self) -> FormMode {
    self.form.read().mode()
  }

  /// Password is required when creating and optional when editing; a blank
  /// password on edit keeps the current one.
  #[instrument(name = "admin_users::submit", skip(self), err(Display))]
  pub async fn submit(&self) -> Result<()> {
    let token = self.app.session.admin_token()?;
    let (draft, editing, mode) = {
      let form = self.form.read();
      (form.draft.clone(), form.editing.clone(), form.mode())
    };
    let (success, failure) = match mode {
      FormMode::Update => ("User updated successfully", "Failed to update user"),
      FormMode::Create => ("User added successfully", "Failed to add user"),
    };

    let payload = match draft.validate(mode) {
      Ok(payload) => payload,
      Err(e) => {
        warn!(error = %e, "User form rejected.");
        let err = AppError::from(e);
        self.list.update(|l| l.notices.error(err.user_message(failure)));
        return Err(err);
      }
    };

    if !self.form.update(FormState::try_begin_submit) {
      warn!("User save already in progress.");
      return Err(AppError::Conflict("A save is already in progress".to_string()));
    }
    self.list.update(|l| l.mutating = true);
    let result = match editing {
      Some(id) => self.app.users.update_user(id, payload, token).await,
      None => self.app.users.create_user(payload, token).await,
    };
    self.form.update(|f| f.submitting = false);
    self.list.update(|l| l.mutating = false);

    match result {
      Ok(()) => {
        info!(message = success, "User saved.");
        self.form.update(FormState::reset);
        self.list.update(|l| l.notices.success(success));
        self.refresh().await
      }
      Err(err) => {
        self.list.update(|l| l.notices.error(err.user_message(failure)));
        Err(err)
      }
    }
  }

  /// Deletes a user. Asking the user to confirm is up to the caller.
  #[instrument(name = "admin_users::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: &UserId) -> Result<()> {
    let token = self.app.session.admin_token()?;
    self.list.update(|l| l.mutating = true);
    let result = self.app.users.delete_user(id.clone(), token).await;
    self.list.update(|l| l.mutating = false);

    match result {
      Ok(()) => {
        self.list.update(|l| l.notices.success("User deleted successfully"));
        self.refresh().await
      }
      Err(err) => {
        self.list.update(|l| l.notices.error(err.user_message("Failed to delete user")));
        Err(err)
      }
    }
  }

  pub fn rows(&self) -> Vec<UserRecord> {
    self.list.read().rows.clone()
  }

  pub fn page(&self) -> u32 {
    self.list.read().pager.page()
  }

  pub fn limit(&self) -> u32 {
    self.list.read().pager.limit()
  }

  pub fn total_pages(&self) -> u32 {
    self.list.read().pager.total_pages()
  }

  pub fn has_next(&self) -> bool {
    self.list.read().can_go_next()
  }

  pub fn has_prev(&self) -> bool {
    self.list.read().can_go_prev()
  }

  pub fn is_loading(&self) -> bool {
    self.list.read().loading
  }

  pub fn notice(&self) -> Option<Notice> {
    current_notice(&self.list)
  }
}
