//! Shared product catalog model for the browser client and the CLI.
//!
//! This crate owns the product record, the listing envelope returned by the
//! remote endpoint, and the derived-view math (filter then slice). It does no
//! I/O so both the WASM client and native tools can reuse it unchanged.

pub mod listing;
pub mod product;
pub mod state;
pub mod view;

pub use listing::{DEFAULT_ENDPOINT, ListingError, ProductListing};
pub use product::{Product, ProductId};
pub use state::CatalogState;
pub use view::{CatalogView, PAGE_SIZE};
