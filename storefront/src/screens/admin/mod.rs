// cafe-storefront/src/screens/admin/mod.rs

//! Admin tables. Each one pages on the server, filters on the server and
//! re-fetches the current page after every successful change.

mod form_state;
mod list_state;

pub mod orders;
pub mod products;
pub mod users;

pub use form_state::FormState;
pub use list_state::ListState;
pub use orders::AdminOrdersScreen;
pub use products::AdminProductsScreen;
pub use users::AdminUsersScreen;
