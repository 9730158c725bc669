// cafe-core/src/flow/control.rs

//! Signals for controlling flow progress and the outcome of a flow run.

/// Returned by a step handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
  /// Carry on with the remaining handlers and steps.
  Continue,
  /// Halt the flow now. Nothing after this handler runs.
  Stop,
}

/// Outcome of a whole flow run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  /// Every step ran to completion.
  Completed,
  /// A handler returned `FlowControl::Stop`.
  Stopped,
}
