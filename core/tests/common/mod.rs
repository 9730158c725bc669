// tests/common/mod.rs
#![allow(dead_code)]

use cafe_core::{FlowControl, FlowError, Shared};
use once_cell::sync::Lazy;
use std::future::Future;
use std::pin::Pin;
use tracing::Level;

#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  // FlowError is not PartialEq, so keep its Debug text.
  #[error("Flow engine error: {0}")]
  Flow(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<FlowError> for TestError {
  fn from(err: FlowError) -> Self {
    TestError::Flow(format!("{:?}", err))
  }
}

pub type TestFuture = Pin<Box<dyn Future<Output = Result<FlowControl, TestError>> + Send>>;

/// Bumps the counter, appends `message` and records the step name.
/// Stops the flow when the context asks to stop at this step.
pub fn recording_handler(
  step_name: &'static str,
  message: &'static str,
) -> impl Fn(Shared<TestContext>) -> TestFuture + Send + Sync + 'static {
  move |ctx: Shared<TestContext>| -> TestFuture {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.message.push_str(message);
      guard.steps_executed.push(step_name.to_string());
      tracing::debug!(target: "test_handlers", step = step_name, counter = guard.counter, "executed");
      if guard.should_stop_at.as_deref() == Some(step_name) {
        return Ok(FlowControl::Stop);
      }
      Ok(FlowControl::Continue)
    })
  }
}

pub fn failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(Shared<TestContext>) -> TestFuture + Send + Sync + 'static {
  move |ctx: Shared<TestContext>| -> TestFuture {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      tracing::warn!(target: "test_handlers", step = step_name, "failing with: '{}'", error_message);
      Err(TestError::Handler(error_message.to_string()))
    })
  }
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
