// cafe-storefront/src/flows/signup_flow.rs

use crate::errors::{AppError, Result};
use crate::flows::contexts::SignupData;
use crate::state::AppState;
use cafe_core::{Flow, FlowControl, FlowOutcome, Registration, Shared};
use tracing::{info, instrument, warn};

pub fn build_signup_flow() -> Flow<SignupData, AppError> {
  let mut flow = Flow::<SignupData, AppError>::new(
    "signup",
    &[("validate_signup_input", false), ("submit_registration", false)],
  );

  flow.on_step("validate_signup_input", |ctx: Shared<SignupData>| async move {
    let result = {
      let mut guard = ctx.write();
      let reg = &mut guard.registration;
      reg.first_name = reg.first_name.trim().to_string();
      reg.last_name = reg.last_name.trim().to_string();
      reg.email = reg.email.trim().to_string();
      reg.validate()
    };
    if let Err(e) = result {
      warn!(error = %e, "Registration input rejected.");
      return Err(AppError::from(e));
    }
    Ok(FlowControl::Continue)
  });

  flow.on_step("submit_registration", |ctx: Shared<SignupData>| async move {
    let (users, registration) = {
      let guard = ctx.read();
      (guard.users.clone(), guard.registration.clone())
    };
    let email = registration.email.clone();
    users.register(registration).await?;
    ctx.write().registered = true;
    info!(%email, "Account registered.");
    Ok::<_, AppError>(FlowControl::Continue)
  });

  flow
}

/// Registers a new account. Does not sign in.
#[instrument(name = "signup", skip_all, fields(email = %registration.email), err(Display))]
pub async fn run_signup(state: &AppState, registration: Registration) -> Result<()> {
  let data = Shared::new(SignupData::new(state.users.clone(), registration));
  match state.flows.signup.run(data.clone()).await? {
    FlowOutcome::Completed if data.read().registered => Ok(()),
    _ => Err(AppError::Internal("Registration halted".to_string())),
  }
}
