//! Game catalog cache and its background refresher

pub mod cache;
pub mod refresher;

pub use cache::{CatalogSnapshot, LookupCache};
pub use refresher::{Refresher, DEFAULT_REFRESH_INTERVAL};
