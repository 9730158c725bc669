// cafe-core/src/flow/step.rs

/// A named step of a flow.
///
/// An `optional` step may be left without handlers; a required step with no
/// handlers fails the run with `FlowError::HandlerMissing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
  pub name: String,
  pub optional: bool,
}

impl StepDef {
  pub fn required(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      optional: false,
    }
  }

  pub fn optional(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      optional: true,
    }
  }
}
