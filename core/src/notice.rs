// cafe-core/src/notice.rs

//! User-facing notices: the short success/error/info line a screen shows
//! after an action, which disappears on its own after a while.
//!
//! Notices travel as `kind|text` strings (`success|Added to cart`), which is
//! what `Display` writes and `FromStr` reads.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
  Success,
  Error,
  Info,
}

impl NoticeKind {
  pub fn as_str(self) -> &'static str {
    match self {
      NoticeKind::Success => "success",
      NoticeKind::Error => "error",
      NoticeKind::Info => "info",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub kind: NoticeKind,
  pub text: String,
  expires_at: Option<Instant>,
}

impl Notice {
  pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
    Self {
      kind,
      text: text.into(),
      expires_at: None,
    }
  }

  pub fn success(text: impl Into<String>) -> Self {
    Self::new(NoticeKind::Success, text)
  }

  pub fn error(text: impl Into<String>) -> Self {
    Self::new(NoticeKind::Error, text)
  }

  pub fn info(text: impl Into<String>) -> Self {
    Self::new(NoticeKind::Info, text)
  }

  /// Expires `ttl` from now. A `ttl` past what `Instant` can hold never expires.
  pub fn expiring_in(mut self, ttl: Duration) -> Self {
    self.expires_at = Instant::now().checked_add(ttl);
    self
  }

  pub fn expires_at(&self) -> Option<Instant> {
    self.expires_at
  }

  pub fn is_expired_at(&self, now: Instant) -> bool {
    self.expires_at.is_some_and(|at| now >= at)
  }

  pub fn is_expired(&self) -> bool {
    self.is_expired_at(Instant::now())
  }

  pub fn is_error(&self) -> bool {
    self.kind == NoticeKind::Error
  }
}

impl fmt::Display for Notice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}|{}", self.kind.as_str(), self.text)
  }
}

impl FromStr for Notice {
  type Err = std::convert::Infallible;

  /// Unknown or missing kinds read as `info` with the whole string as text.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parsed = s.split_once('|').and_then(|(kind, text)| {
      let kind = match kind {
        "success" => NoticeKind::Success,
        "error" => NoticeKind::Error,
        "info" => NoticeKind::Info,
        _ => return None,
      };
      Some(Notice::new(kind, text))
    });
    Ok(parsed.unwrap_or_else(|| Notice::info(s)))
  }
}

/// The single notice slot a screen owns. A new notice replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
  ttl: Option<Duration>,
  current: Option<Notice>,
}

impl NoticeBoard {
  /// Notices posted here expire after `ttl`.
  pub fn with_ttl(ttl: Duration) -> Self {
    Self {
      ttl: Some(ttl),
      current: None,
    }
  }

  /// Notices posted here stay until dismissed or replaced.
  pub fn sticky() -> Self {
    Self::default()
  }

  pub fn post(&mut self, notice: Notice) {
    let notice = match self.ttl {
      Some(ttl) if notice.expires_at().is_none() => notice.expiring_in(ttl),
      _ => notice,
    };
    self.current = Some(notice);
  }

  pub fn success(&mut self, text: impl Into<String>) {
    self.post(Notice::success(text));
  }

  pub fn error(&mut self, text: impl Into<String>) {
    self.post(Notice::error(text));
  }

  /// The visible notice, if any has not expired yet.
  pub fn current(&self) -> Option<&Notice> {
    self.current_at(Instant::now())
  }

  pub fn current_at(&self, now: Instant) -> Option<&Notice> {
    self.current.as_ref().filter(|notice| !notice.is_expired_at(now))
  }

  pub fn dismiss(&mut self) {
    self.current = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn encodes_and_reads_kind_and_text() {
    let notice: Notice = "error|Product already in cart".parse().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Product already in cart");
    assert_eq!(Notice::success("Added to cart").to_string(), "success|Added to cart");
  }

  #[test]
  fn text_may_contain_the_separator() {
    let notice: Notice = "info|a|b".parse().unwrap();
    assert_eq!(notice.text, "a|b");
  }

  #[test]
  fn untagged_text_is_info() {
    let notice: Notice = "Saved".parse().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.text, "Saved");
  }

  #[test]
  fn board_hides_expired_notice() {
    let mut board = NoticeBoard::with_ttl(Duration::from_secs(3));
    board.success("Added to cart");
    let posted = board.current().unwrap().expires_at().unwrap();
    assert!(board.current_at(posted - Duration::from_millis(1)).is_some());
    assert!(board.current_at(posted).is_none());
  }

  #[test]
  fn sticky_board_keeps_notice_until_dismissed() {
    let mut board = NoticeBoard::sticky();
    board.error("Failed to load orders");
    assert!(board.current().unwrap().is_error());
    board.dismiss();
    assert!(board.current().is_none());
  }

  #[test]
  fn unrepresentable_ttl_never_expires() {
    let notice = Notice::info("Saved").expiring_in(Duration::from_secs(u64::MAX));
    assert!(notice.expires_at().is_none());
    assert!(!notice.is_expired());

    let mut board = NoticeBoard::with_ttl(Duration::from_secs(u64::MAX));
    board.success("Added to cart");
    assert_eq!(board.current().unwrap().text, "Added to cart");
  }
}
