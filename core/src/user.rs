// cafe-core/src/user.rs

//! Identity schemas: sessions, credentials, registration, profiles and the
//! admin user form.

use crate::ids::UserId;
use crate::order::Buyer;
use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  #[default]
  User,
  Admin,
}

impl Role {
  pub fn as_str(self) -> &'static str {
    match self {
      Role::User => "user",
      Role::Admin => "admin",
    }
  }
}

/// The signed-in user as returned by `POST /api/users/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
  #[serde(alias = "_id")]
  pub id: UserId,
  pub email: String,
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name: String,
  #[serde(default)]
  pub role: Role,
  pub token: String,
}

impl Session {
  pub fn is_admin(&self) -> bool {
    self.role == Role::Admin
  }

  pub fn is_authenticated(&self) -> bool {
    !self.token.is_empty()
  }

  /// Buyer identity stamped on orders placed in this session.
  pub fn buyer(&self) -> Buyer {
    Buyer {
      user_id: self.id.clone(),
      email: self.email.clone(),
    }
  }
}

// Tokens stay out of logs.
impl fmt::Debug for Session {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Session")
      .field("id", &self.id)
      .field("email", &self.email)
      .field("role", &self.role)
      .field("token", &"[REDACTED]")
      .finish()
  }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

impl Credentials {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      email: email.into(),
      password: password.into(),
    }
  }

  pub fn validate(&self) -> Result<(), ValidationError> {
    validation::email(&self.email)?;
    if self.password.is_empty() {
      return Err(ValidationError::Required { field: "Password" });
    }
    Ok(())
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials").field("email", &self.email).finish_non_exhaustive()
  }
}

/// Body of `POST /api/users/register`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub password: String,
}

impl Registration {
  pub fn validate(&self) -> Result<(), ValidationError> {
    validation::required("First name", &self.first_name)?;
    validation::required("Last name", &self.last_name)?;
    validation::email(&self.email)?;
    validation::new_password(&self.password)?;
    Ok(())
  }
}

impl fmt::Debug for Registration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registration")
      .field("first_name", &self.first_name)
      .field("last_name", &self.last_name)
      .field("email", &self.email)
      .finish_non_exhaustive()
  }
}

/// `GET /api/users/:id/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  #[serde(rename = "_id", alias = "id")]
  pub id: UserId,
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name: String,
  pub email: String,
}

/// Body of `PATCH /api/users/:id/profile`; a blank password is not sent.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub password: String,
}

impl ProfileUpdate {
  pub fn from_profile(profile: &Profile) -> Self {
    Self {
      first_name: profile.first_name.clone(),
      last_name: profile.last_name.clone(),
      email: profile.email.clone(),
      password: String::new(),
    }
  }

  pub fn validate(&self) -> Result<(), ValidationError> {
    validation::email(&self.email)?;
    validation::optional_password(&self.password)?;
    Ok(())
  }
}

impl fmt::Debug for ProfileUpdate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ProfileUpdate")
      .field("first_name", &self.first_name)
      .field("last_name", &self.last_name)
      .field("email", &self.email)
      .field("password_changed", &!self.password.is_empty())
      .finish()
  }
}

/// A row of the admin users list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
  #[serde(rename = "_id")]
  pub id: UserId,
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name: String,
  pub email: String,
  #[serde(default)]
  pub role: Role,
}

/// Whether the admin user form creates a new user or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
  Create,
  Update,
}

/// The admin user form as typed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub password: String,
  pub role: Option<Role>,
}

/// Validated body of `POST /api/users` and `PATCH /api/users/:id`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  pub role: Role,
}

impl UserDraft {
  /// Form pre-filled from a row; the password field starts blank.
  pub fn from_record(record: &UserRecord) -> Self {
    Self {
      first_name: record.first_name.clone(),
      last_name: record.last_name.clone(),
      email: record.email.clone(),
      password: String::new(),
      role: Some(record.role),
    }
  }

  pub fn validate(&self, mode: FormMode) -> Result<UserPayload, ValidationError> {
    let first_name = validation::required("First name", &self.first_name)?.to_string();
    let last_name = validation::required("Last name", &self.last_name)?.to_string();
    let email = validation::email(&self.email)?.to_string();
    let password = match mode {
      FormMode::Create => Some(validation::new_password(&self.password)?.to_string()),
      FormMode::Update => validation::optional_password(&self.password)?.map(str::to_string),
    };
    let role = self.role.ok_or(ValidationError::Required { field: "Role" })?;

    Ok(UserPayload {
      first_name,
      last_name,
      email,
      password,
      role,
    })
  }
}

impl fmt::Debug for UserDraft {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UserDraft")
      .field("email", &self.email)
      .field("role", &self.role)
      .finish_non_exhaustive()
  }
}

impl fmt::Debug for UserPayload {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UserPayload")
      .field("email", &self.email)
      .field("role", &self.role)
      .field("password_set", &self.password.is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn session_accepts_either_id_key() {
    let a: Session =
      serde_json::from_str(r#"{"id":"u1","email":"a@b.c","role":"admin","token":"t"}"#).unwrap();
    let b: Session = serde_json::from_str(r#"{"_id":"u1","email":"a@b.c","token":"t"}"#).unwrap();
    assert!(a.is_admin());
    assert_eq!(b.role, Role::User);
    assert_eq!(a.id, b.id);
  }

  #[test]
  fn session_debug_hides_token() {
    let s = Session {
      id: UserId::new("u1"),
      email: "a@b.c".into(),
      first_name: String::new(),
      last_name: String::new(),
      role: Role::User,
      token: "secret-token".into(),
    };
    assert!(!format!("{s:?}").contains("secret-token"));
  }

  #[test]
  fn registration_rules() {
    let mut r = Registration {
      first_name: "Ash".into(),
      last_name: "Roast".into(),
      email: "ash@cafe.com".into(),
      password: "123".into(),
    };
    assert_eq!(r.validate(), Err(ValidationError::PasswordTooShort { min: 6 }));
    r.password = "123456".into();
    assert_eq!(r.validate(), Ok(()));
  }

  #[test]
  fn profile_update_omits_blank_password() {
    let update = ProfileUpdate {
      first_name: "Ash".into(),
      last_name: "Roast".into(),
      email: "ash@cafe.com".into(),
      password: String::new(),
    };
    let json = serde_json::to_value(&update).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["firstName"], "Ash");
  }

  #[test]
  fn user_draft_password_depends_on_mode() {
    let draft = UserDraft {
      first_name: "Bo".into(),
      last_name: "Bean".into(),
      email: "bo@cafe.com".into(),
      password: String::new(),
      role: Some(Role::Admin),
    };
    assert_eq!(
      draft.validate(FormMode::Create),
      Err(ValidationError::Required { field: "Password" })
    );
    let payload = draft.validate(FormMode::Update).unwrap();
    assert_eq!(payload.password, None);
    assert!(serde_json::to_value(&payload).unwrap().get("password").is_none());
  }

  #[test]
  fn user_draft_requires_role() {
    let draft = UserDraft {
      first_name: "Bo".into(),
      last_name: "Bean".into(),
      email: "bo@cafe.com".into(),
      password: "secret1".into(),
      role: None,
    };
    assert_eq!(draft.validate(FormMode::Create), Err(ValidationError::Required { field: "Role" }));
  }
}
