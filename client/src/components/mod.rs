//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the product list screen. They read the shared
//! `ProductsState` from context or take the derived view as a prop.

pub mod filter_bar;
pub mod pagination;
pub mod product_modal;
pub mod product_table;
