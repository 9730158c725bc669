// cafe-core/src/flow/mod.rs

//! A small step-flow engine.
//!
//! A `Flow<TData, Err>` is an ordered list of named steps. Each step may carry
//! `before`, `on` and `after` handlers that receive the flow's `Shared<TData>`
//! context. Handlers can stop the flow early (`FlowControl::Stop`) or fail it
//! with the flow's error type. Checkout, sign-in and sign-up are built on it.

pub mod control;
pub mod definition;
pub mod execution;
pub mod handler;
pub mod shared;
pub mod step;

pub use control::{FlowControl, FlowOutcome};
pub use definition::Flow;
pub use handler::Handler;
pub use shared::Shared;
pub use step::StepDef;
