// cafe-core/src/validation.rs

//! Client-side validation. A `ValidationError` blocks submission before any
//! network call is made; its `Display` text is what the form shows.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{field} is required")]
  Required { field: &'static str },

  #[error("A valid email address is required")]
  InvalidEmail,

  #[error("Password must be at least {min} characters")]
  PasswordTooShort { min: usize },

  #[error("{field} must be a number")]
  InvalidNumber { field: &'static str },

  #[error("Price cannot be negative")]
  NegativePrice,

  #[error("Price can have at most two decimal places")]
  PriceTooPrecise,

  #[error("{field} must be a valid URL")]
  InvalidUrl { field: &'static str },

  #[error("Page size is not one of the offered sizes")]
  InvalidPageSize,
}

/// Trimmed value, or `Required` when it is blank.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    Err(ValidationError::Required { field })
  } else {
    Ok(trimmed)
  }
}

/// Loose check: non-blank with an `@` that has something on both sides.
pub fn email(value: &str) -> Result<&str, ValidationError> {
  let trimmed = required("Email", value)?;
  match trimmed.split_once('@') {
    Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(trimmed),
    _ => Err(ValidationError::InvalidEmail),
  }
}

pub fn new_password(value: &str) -> Result<&str, ValidationError> {
  if value.is_empty() {
    return Err(ValidationError::Required { field: "Password" });
  }
  if value.chars().count() < MIN_PASSWORD_LEN {
    return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
  }
  Ok(value)
}

/// Blank means "keep the current password"; anything else must be a valid new one.
pub fn optional_password(value: &str) -> Result<Option<&str>, ValidationError> {
  if value.is_empty() {
    Ok(None)
  } else {
    new_password(value).map(Some)
  }
}

pub fn absolute_url(field: &'static str, value: &str) -> Result<url::Url, ValidationError> {
  let trimmed = required(field, value)?;
  url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl { field })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn required_trims_and_rejects_blank() {
    assert_eq!(required("Name", "  Latte "), Ok("Latte"));
    assert_eq!(required("Name", "   "), Err(ValidationError::Required { field: "Name" }));
  }

  #[test]
  fn email_needs_both_sides_of_at() {
    assert!(email("ash@cafe.com").is_ok());
    assert_eq!(email("ash@"), Err(ValidationError::InvalidEmail));
    assert_eq!(email("cafe.com"), Err(ValidationError::InvalidEmail));
    assert_eq!(email(""), Err(ValidationError::Required { field: "Email" }));
  }

  #[test]
  fn passwords() {
    assert_eq!(new_password("12345"), Err(ValidationError::PasswordTooShort { min: 6 }));
    assert_eq!(new_password("123456"), Ok("123456"));
    assert_eq!(optional_password(""), Ok(None));
    assert!(optional_password("abc").is_err());
  }

  #[test]
  fn urls_must_be_absolute() {
    assert!(absolute_url("Image URL", "https://img.example/latte.png").is_ok());
    assert_eq!(
      absolute_url("Image URL", "latte.png"),
      Err(ValidationError::InvalidUrl { field: "Image URL" })
    );
  }
}
