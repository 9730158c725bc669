// cafe-core/src/listing/mod.rs

//! Paging state for list screens: numbered pages with a filter for the admin
//! tables, an append-only feed for the menu.

mod feed;
mod filter;
mod page;
mod pager;

pub use feed::Feed;
pub use filter::{ListFilter, SearchFilter};
pub use page::{total_pages, Page};
pub use pager::Pager;
