// cafe-core/src/flow/definition.rs

//! `Flow<TData, Err>`: step list and handler registration.

use super::handler::{boxed, Handler};
use super::step::StepDef;
use super::{FlowControl, Shared};
use crate::error::FlowError;
use std::collections::HashMap;
use std::future::Future;

/// An ordered, named sequence of steps over a shared `TData` context.
///
/// `Err` is the error type the flow's handlers return. It must be creatable
/// from `FlowError` so that engine failures (missing handler, unknown step)
/// surface through the same channel.
pub struct Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef>,
  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a flow from `(step_name, optional)` pairs.
  pub fn new(name: impl Into<String>, step_defs: &[(&str, bool)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(step_name, optional)| {
        if *optional {
          StepDef::optional(*step_name)
        } else {
          StepDef::required(*step_name)
        }
      })
      .collect();
    Self {
      name: name.into(),
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  fn position(&self, step_name: &str) -> Option<usize> {
    self.steps.iter().position(|s| s.name == step_name)
  }

  // --- Handler registration ---
  //
  // Registration never fails; a handler attached to a name that is not a step
  // is reported as `FlowError::StepNotFound` when the flow runs.

  pub fn before_step<F, E>(&mut self, step_name: &str, handler_fn: impl Fn(Shared<TData>) -> F + Send + Sync + 'static) -> &mut Self
  where
    F: Future<Output = Result<FlowControl, E>> + Send + 'static,
    E: Into<Err> + 'static,
  {
    self.before.entry(step_name.to_string()).or_default().push(boxed(handler_fn));
    self
  }

  pub fn on_step<F, E>(&mut self, step_name: &str, handler_fn: impl Fn(Shared<TData>) -> F + Send + Sync + 'static) -> &mut Self
  where
    F: Future<Output = Result<FlowControl, E>> + Send + 'static,
    E: Into<Err> + 'static,
  {
    self.on.entry(step_name.to_string()).or_default().push(boxed(handler_fn));
    self
  }

  pub fn after_step<F, E>(&mut self, step_name: &str, handler_fn: impl Fn(Shared<TData>) -> F + Send + Sync + 'static) -> &mut Self
  where
    F: Future<Output = Result<FlowControl, E>> + Send + 'static,
    E: Into<Err> + 'static,
  {
    self.after.entry(step_name.to_string()).or_default().push(boxed(handler_fn));
    self
  }

  /// Checks that every registered handler targets a defined step.
  pub(crate) fn check_hooks(&self) -> Result<(), FlowError> {
    for key in self.before.keys().chain(self.on.keys()).chain(self.after.keys()) {
      if self.position(key).is_none() {
        return Err(FlowError::StepNotFound { step_name: key.clone() });
      }
    }
    Ok(())
  }
}

impl<TData, Err> std::fmt::Debug for Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Flow")
      .field("name", &self.name)
      .field("steps", &self.steps)
      .finish()
  }
}
