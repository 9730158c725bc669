// cafe-core/src/flow/execution.rs

//! `Flow::run()`: executes steps in order, each through its before/on/after phases.

use super::definition::Flow;
use super::handler::Handler;
use super::step::StepDef;
use super::{FlowControl, FlowOutcome, Shared};
use crate::error::FlowError;
use tracing::{event, info_span, instrument, Instrument, Level};

enum StepResult {
  Continue,
  Stopped,
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Runs the flow against `ctx`.
  ///
  /// Engine problems (a handler bound to an unknown step, a required step
  /// without handlers) are converted into `Err` through `From<FlowError>`.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(flow = %self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx: Shared<TData>) -> Result<FlowOutcome, Err> {
    self.check_hooks().map_err(Err::from)?;
    event!(Level::DEBUG, "Flow execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_span = info_span!(
        "flow_step",
        step_name = step_def.name.as_str(),
        step_index = step_idx,
        optional = step_def.optional
      );
      if let StepResult::Stopped = self.run_step(step_def, &ctx).instrument(step_span).await? {
        return Ok(FlowOutcome::Stopped);
      }
    }

    event!(Level::DEBUG, "Flow completed.");
    Ok(FlowOutcome::Completed)
  }

  async fn run_step(&self, step_def: &StepDef, ctx: &Shared<TData>) -> Result<StepResult, Err> {
    let step_name = step_def.name.as_str();

    let before = self.before.get(step_name).filter(|v| !v.is_empty());
    let on = self.on.get(step_name).filter(|v| !v.is_empty());
    let after = self.after.get(step_name).filter(|v| !v.is_empty());

    if before.is_none() && on.is_none() && after.is_none() {
      if step_def.optional {
        event!(Level::DEBUG, "Optional step has no handlers, skipping.");
        return Ok(StepResult::Continue);
      }
      event!(Level::ERROR, "Required step has no handlers.");
      return Err(Err::from(FlowError::HandlerMissing {
        step_name: step_def.name.clone(),
      }));
    }

    for (phase, handlers) in [("before", before), ("on", on), ("after", after)] {
      let Some(handlers) = handlers else { continue };
      if let StepResult::Stopped = run_phase(phase, handlers, ctx).await? {
        event!(Level::INFO, phase, "Flow stopped by a handler.");
        return Ok(StepResult::Stopped);
      }
    }
    event!(Level::DEBUG, "Step finished.");
    Ok(StepResult::Continue)
  }
}

async fn run_phase<TData, Err>(
  phase: &'static str,
  handlers: &[Handler<TData, Err>],
  ctx: &Shared<TData>,
) -> Result<StepResult, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + Send + Sync + 'static,
{
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    event!(Level::TRACE, phase, handler_index = handler_idx, "Running handler.");
    match handler_fn(ctx.clone()).await {
      Ok(FlowControl::Continue) => {}
      Ok(FlowControl::Stop) => return Ok(StepResult::Stopped),
      Err(e) => {
        event!(Level::WARN, phase, error = %e, "Handler failed.");
        return Err(e);
      }
    }
  }
  Ok(StepResult::Continue)
}
