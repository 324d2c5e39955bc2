//! Working state behind the product list screen.
//!
//! `CatalogState` owns the full fetched list, the filter text, the current
//! page, and the selected product. Every mutator keeps the page inside
//! `1..=total_pages` for the current filter, so [`CatalogState::view`] always
//! yields a contiguous slice of the filtered list.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::product::{Product, ProductId};
use crate::view::{self, CatalogView, PAGE_SIZE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    products: Vec<Product>,
    filter: String,
    page: usize,
    page_size: usize,
    selected: Option<Product>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl CatalogState {
    /// Empty state on page 1. A zero `page_size` is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            products: Vec::new(),
            filter: String::new(),
            page: 1,
            page_size: page_size.max(1),
            selected: None,
        }
    }

    /// Replace the full product list.
    ///
    /// Keeps the filter, clamps the page, and drops a selection whose
    /// product is no longer present.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
        if let Some(selected) = &self.selected {
            self.selected = self.products.iter().find(|p| p.id == selected.id).cloned();
        }
        self.page = self.page.min(self.total_pages());
    }

    /// Update the filter text and return to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 1;
    }

    /// Jump to a 1-based page. Returns `false` and leaves the state alone when
    /// `page` is outside `1..=total_pages` or already current.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == self.page || page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.page > 1 && self.set_page(self.page - 1)
    }

    /// Select a product from the full list. Unknown ids clear nothing and
    /// return `false`.
    pub fn select(&mut self, id: ProductId) -> bool {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => {
                self.selected = Some(product.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Products passing the current filter, in list order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Product> {
        view::filter_products(&self.products, &self.filter)
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        view::total_pages(self.filtered().len(), self.page_size)
    }

    /// Rows and pager metadata for the current filter and page.
    #[must_use]
    pub fn view(&self) -> CatalogView {
        CatalogView::compute(&self.products, &self.filter, self.page, self.page_size)
    }
}
