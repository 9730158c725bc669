// cafe-core/src/lib.rs

//! Domain model of the café storefront.
//!
//! - `cart`: the session cart and its totals.
//! - `catalog`, `order`, `user`: wire schemas and form validation.
//! - `listing`: paging state for list screens.
//! - `notice`: the short messages screens show after an action.
//! - `flow`: a step-flow engine for multi-step actions such as checkout.
//!
//! Nothing in here performs I/O.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod flow;
pub mod ids;
pub mod listing;
pub mod money;
pub mod notice;
pub mod order;
pub mod user;
pub mod validation;

pub use crate::cart::{Cart, CartError, Decrement, LineItem};
pub use crate::catalog::{Product, ProductDraft, ProductPayload};
pub use crate::error::{FlowError, FlowResult};
pub use crate::flow::{Flow, FlowControl, FlowOutcome, Handler, Shared, StepDef};
pub use crate::ids::{OrderId, ProductId, UserId};
pub use crate::listing::{Feed, ListFilter, Page, Pager, SearchFilter};
pub use crate::notice::{Notice, NoticeBoard, NoticeKind};
pub use crate::order::{Buyer, NewOrder, Order, OrderStatus, StatusError, StatusFilter, StatusUpdate};
pub use crate::user::{
  Credentials, FormMode, Profile, ProfileUpdate, Registration, Role, Session, UserDraft, UserPayload, UserRecord,
};
pub use crate::validation::ValidationError;
