// cafe-storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MENU_PAGE_SIZE: u32 = 12;
pub const DEFAULT_NOTICE_TTL_SECS: u64 = 3;
pub const MAX_NOTICE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base URL of the backend; service paths (`/api/...`) are joined onto it.
  pub api_url: Url,
  pub http_timeout: Duration,
  pub menu_page_size: u32,
  /// How long success/error notices stay visible.
  pub notice_ttl: Duration,
  pub log_json: bool,
}

impl AppConfig {
  /// Defaults for everything except the backend address.
  pub fn new(api_url: Url) -> Self {
    Self {
      api_url,
      http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
      menu_page_size: DEFAULT_MENU_PAGE_SIZE,
      notice_ttl: Duration::from_secs(DEFAULT_NOTICE_TTL_SECS),
      log_json: false,
    }
  }

  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let raw_url = env::var("CAFE_API_URL")
      .map_err(|e| AppError::Config(format!("Missing environment variable 'CAFE_API_URL': {}", e)))?;
    let api_url = parse_base_url(&raw_url)?;

    let http_timeout = Duration::from_secs(parse_var("CAFE_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?);
    let menu_page_size = parse_var("CAFE_MENU_PAGE_SIZE", DEFAULT_MENU_PAGE_SIZE)?;
    if menu_page_size == 0 {
      return Err(AppError::Config("CAFE_MENU_PAGE_SIZE must be at least 1".to_string()));
    }
    let notice_ttl_secs = parse_var("CAFE_NOTICE_TTL_SECS", DEFAULT_NOTICE_TTL_SECS)?;
    if notice_ttl_secs > MAX_NOTICE_TTL_SECS {
      return Err(AppError::Config(format!(
        "CAFE_NOTICE_TTL_SECS must be at most {} seconds",
        MAX_NOTICE_TTL_SECS
      )));
    }
    let notice_ttl = Duration::from_secs(notice_ttl_secs);
    let log_json = parse_var("CAFE_LOG_JSON", false)?;

    tracing::info!(api_url = %api_url, "Application configuration loaded successfully.");

    Ok(Self {
      api_url,
      http_timeout,
      menu_page_size,
      notice_ttl,
      log_json,
    })
  }
}

/// Parses the backend address. A missing trailing slash is added so that
/// joining `api/...` keeps any path prefix.
pub fn parse_base_url(raw: &str) -> Result<Url> {
  let mut url = Url::parse(raw.trim()).map_err(|e| AppError::Config(format!("Invalid CAFE_API_URL '{}': {}", raw, e)))?;
  if url.cannot_be_a_base() {
    return Err(AppError::Config(format!("CAFE_API_URL '{}' cannot be used as a base URL", raw)));
  }
  if !url.path().ends_with('/') {
    let path = format!("{}/", url.path());
    url.set_path(&path);
  }
  Ok(url)
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match env::var(name) {
    Ok(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", name, raw, e))),
    Err(_) => Ok(default),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn clear_env() {
    for name in [
      "CAFE_API_URL",
      "CAFE_HTTP_TIMEOUT_SECS",
      "CAFE_MENU_PAGE_SIZE",
      "CAFE_NOTICE_TTL_SECS",
      "CAFE_LOG_JSON",
    ] {
      env::remove_var(name);
    }
  }

  #[test]
  fn base_url_gets_trailing_slash() {
    let url = parse_base_url("http://localhost:8080/cafe").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/cafe/");
    assert_eq!(url.join("api/orders").unwrap().as_str(), "http://localhost:8080/cafe/api/orders");
    assert!(matches!(parse_base_url("not a url"), Err(AppError::Config(_))));
  }

  #[test]
  #[serial]
  fn from_env_applies_defaults() {
    clear_env();
    env::set_var("CAFE_API_URL", "http://127.0.0.1:9000");
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.http_timeout, Duration::from_secs(10));
    assert_eq!(cfg.menu_page_size, 12);
    assert_eq!(cfg.notice_ttl, Duration::from_secs(3));
    assert!(!cfg.log_json);
    clear_env();
  }

  #[test]
  #[serial]
  fn from_env_rejects_bad_numbers() {
    clear_env();
    env::set_var("CAFE_API_URL", "http://127.0.0.1:9000");
    env::set_var("CAFE_MENU_PAGE_SIZE", "twelve");
    assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
    env::set_var("CAFE_MENU_PAGE_SIZE", "0");
    assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
    clear_env();
  }

  #[test]
  #[serial]
  fn from_env_bounds_notice_ttl() {
    clear_env();
    env::set_var("CAFE_API_URL", "http://127.0.0.1:9000");
    env::set_var("CAFE_NOTICE_TTL_SECS", u64::MAX.to_string());
    assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
    env::set_var("CAFE_NOTICE_TTL_SECS", "3601");
    assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
    env::set_var("CAFE_NOTICE_TTL_SECS", "3600");
    assert_eq!(AppConfig::from_env().unwrap().notice_ttl, Duration::from_secs(3600));
    clear_env();
  }
}
