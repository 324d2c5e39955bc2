//! Product list screen state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` provided by `App`. Components read the derived view
//! from `catalog` and write filter, page, and selection changes back through
//! `CatalogState` so its paging invariants stay in one place.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use catalog::{CatalogState, Product};

/// Catalog state plus the single fetch's progress.
#[derive(Clone, Debug)]
pub struct ProductsState {
    pub catalog: CatalogState,
    /// True until the startup fetch settles, either way.
    pub loading: bool,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self { catalog: CatalogState::default(), loading: true }
    }
}

impl ProductsState {
    /// Store the fetched list and leave the loading state.
    pub fn finish_loading(&mut self, products: Vec<Product>) {
        self.catalog.load(products);
        self.loading = false;
    }

    /// Leave the loading state with whatever list is already present.
    pub fn fail_loading(&mut self) {
        self.loading = false;
    }
}
