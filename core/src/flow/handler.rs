// cafe-core/src/flow/handler.rs

use super::{FlowControl, Shared};
use std::future::Future;
use std::pin::Pin;

/// A step handler: takes a clone of the flow's shared context and resolves to
/// a `FlowControl` or the flow's error type.
///
/// Handlers must drop every lock guard on the context before awaiting.
pub type Handler<TData, Err> = Box<
  dyn Fn(Shared<TData>) -> Pin<Box<dyn Future<Output = Result<FlowControl, Err>> + Send>> + Send + Sync,
>;

/// Boxes a user closure into a `Handler`, converting its error into `Err`.
pub(crate) fn boxed<TData, Err, F, E>(handler_fn: impl Fn(Shared<TData>) -> F + Send + Sync + 'static) -> Handler<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: 'static,
  F: Future<Output = Result<FlowControl, E>> + Send + 'static,
  E: Into<Err> + 'static,
{
  Box::new(move |ctx| {
    let fut = handler_fn(ctx);
    Box::pin(async move { fut.await.map_err(Into::into) })
  })
}
