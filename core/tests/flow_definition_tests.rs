// tests/flow_definition_tests.rs
mod common;

use cafe_core::{Flow, Shared};
use common::*;
use serial_test::serial;

#[test]
fn test_steps_keep_declared_order() {
  let flow = Flow::<TestContext, TestError>::new("order", &[("c", false), ("a", true), ("b", false)]);
  assert_eq!(flow.name(), "order");
  assert_eq!(flow.step_names(), vec!["c", "a", "b"]);
}

#[tokio::test]
#[serial]
async fn test_handler_on_unknown_step_fails_at_run() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("typo", &[("real", false)]);
  flow
    .on_step("real", recording_handler("real", "r"))
    .on_step("reall", recording_handler("reall", "x"));

  let ctx = Shared::new(TestContext::default());
  let err = flow.run(ctx.clone()).await.unwrap_err();
  assert!(matches!(err, TestError::Flow(text) if text.contains("StepNotFound")));
  assert!(ctx.read().steps_executed.is_empty());
}
