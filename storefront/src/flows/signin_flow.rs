// cafe-storefront/src/flows/signin_flow.rs

use crate::errors::{AppError, Result};
use crate::flows::contexts::SigninData;
use crate::state::AppState;
use cafe_core::{Credentials, Flow, FlowControl, FlowOutcome, Session, Shared};
use tracing::{event, instrument, warn, Level};

pub fn build_signin_flow() -> Flow<SigninData, AppError> {
  let mut flow = Flow::<SigninData, AppError>::new(
    "signin",
    &[("validate_signin_input", false), ("request_session", false), ("store_session", false)],
  );

  flow.on_step("validate_signin_input", |ctx: Shared<SigninData>| async move {
    let result = {
      let mut guard = ctx.write();
      let email = guard.credentials.email.trim().to_string();
      guard.credentials.email = email;
      guard.credentials.validate()
    };
    if let Err(e) = result {
      warn!(error = %e, "Sign-in input rejected.");
      return Err(AppError::from(e));
    }
    Ok(FlowControl::Continue)
  });

  flow.on_step("request_session", |ctx: Shared<SigninData>| async move {
    let (users, credentials) = {
      let guard = ctx.read();
      (guard.users.clone(), guard.credentials.clone())
    };
    let session = users.login(credentials).await?;
    if !session.is_authenticated() {
      event!(Level::WARN, user_id = %session.id, "Login response carried no token.");
      return Err(AppError::Auth("Invalid email or password".to_string()));
    }
    event!(Level::INFO, user_id = %session.id, "Session issued.");
    ctx.write().signed_in = Some(session);
    Ok(FlowControl::Continue)
  });

  flow.on_step("store_session", |ctx: Shared<SigninData>| async move {
    let guard = ctx.read();
    match guard.signed_in.clone() {
      Some(session) => {
        guard.session.sign_in(session);
        Ok(FlowControl::Continue)
      }
      None => Err(AppError::Internal("Session missing at store step".to_string())),
    }
  });

  flow
}

/// Signs in with `credentials` and stores the session in the shared context.
#[instrument(name = "signin", skip_all, fields(email = %credentials.email), err(Display))]
pub async fn run_signin(state: &AppState, credentials: Credentials) -> Result<Session> {
  let data = Shared::new(SigninData::new(state.users.clone(), state.session.clone(), credentials));
  match state.flows.signin.run(data.clone()).await? {
    FlowOutcome::Completed => data
      .write()
      .signed_in
      .take()
      .ok_or_else(|| AppError::Internal("Sign-in completed without a session".to_string())),
    FlowOutcome::Stopped => Err(AppError::Internal("Sign-in halted".to_string())),
  }
}
