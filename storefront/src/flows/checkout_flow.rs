// cafe-storefront/src/flows/checkout_flow.rs

use crate::errors::{AppError, Result};
use crate::flows::contexts::CheckoutData;
use crate::state::AppState;
use cafe_core::{CartError, Flow, FlowControl, FlowOutcome, NewOrder, Shared};
use tracing::{event, info, instrument, Level};

pub fn build_checkout_flow() -> Flow<CheckoutData, AppError> {
  let mut flow = Flow::<CheckoutData, AppError>::new(
    "checkout",
    &[
      ("validate_cart", false),
      ("authenticate_buyer", false),
      ("snapshot_order", false),
      ("submit_order", false),
      ("clear_cart", false),
    ],
  );

  // Step 1: nothing to order. Fails before any request is made.
  flow.on_step("validate_cart", |ctx: Shared<CheckoutData>| async move {
    let lines = ctx.read().session.cart_count();
    if lines == 0 {
      event!(Level::DEBUG, "Checkout attempted with an empty cart.");
      return Err(AppError::from(CartError::Empty));
    }
    event!(Level::DEBUG, lines, "Cart has lines to order.");
    Ok(FlowControl::Continue)
  });

  // Step 2: buyer identity from the signed-in session.
  flow.on_step("authenticate_buyer", |ctx: Shared<CheckoutData>| async move {
    let buyer = ctx.read().session.buyer();
    match buyer {
      Some(buyer) => {
        ctx.write().buyer = Some(buyer);
        Ok(FlowControl::Continue)
      }
      None => Err(AppError::Auth("Please log in to place an order".to_string())),
    }
  });

  // Step 3: freeze the cart into the order body.
  flow.on_step("snapshot_order", |ctx: Shared<CheckoutData>| async move {
    let snapshot = {
      let guard = ctx.read();
      let buyer = guard
        .buyer
        .as_ref()
        .ok_or_else(|| AppError::Internal("Buyer missing at snapshot step".to_string()))?;
      let cart = guard.session.cart().read();
      cart.snapshot(buyer)?
    };
    ctx.write().order = Some(snapshot);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  // Step 4: the only network call. On failure the cart is untouched.
  flow.on_step("submit_order", |ctx: Shared<CheckoutData>| async move {
    let (orders, order) = {
      let guard = ctx.read();
      let order = guard
        .order
        .clone()
        .ok_or_else(|| AppError::Internal("Order snapshot missing at submit step".to_string()))?;
      (guard.orders.clone(), order)
    };
    let order_value = order.order_value;
    orders.place_order(order).await?;
    ctx.write().submitted = true;
    info!(%order_value, "Order submitted.");
    Ok::<_, AppError>(FlowControl::Continue)
  });

  // Step 5: empty the cart only after the service accepted the order.
  flow.on_step("clear_cart", |ctx: Shared<CheckoutData>| async move {
    ctx.read().session.cart().write().clear();
    event!(Level::DEBUG, "Cart cleared after checkout.");
    Ok::<_, AppError>(FlowControl::Continue)
  });

  flow
}

/// Places the session's cart as an order and returns what was submitted.
#[instrument(name = "checkout", skip_all, err(Display))]
pub async fn run_checkout(state: &AppState) -> Result<NewOrder> {
  let data = Shared::new(CheckoutData::new(state.orders.clone(), state.session.clone()));
  match state.flows.checkout.run(data.clone()).await? {
    FlowOutcome::Completed => data
      .write()
      .order
      .take()
      .ok_or_else(|| AppError::Internal("Checkout completed without an order".to_string())),
    FlowOutcome::Stopped => Err(AppError::Internal("Checkout halted before the order was placed".to_string())),
  }
}
