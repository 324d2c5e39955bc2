//! Derived view computation: filter the full list, then slice one page.
//!
//! DESIGN
//! ======
//! Inputs are tiny and change on every keystroke, so the view is recomputed
//! from scratch each time instead of being cached. Pages are 1-based to match
//! what the pager shows.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::ops::Range;

use crate::product::Product;

/// Number of rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Whether `product` passes the id filter.
///
/// Matches when the decimal id contains `filter` as a substring; the empty
/// filter matches everything.
#[must_use]
pub fn matches_filter(product: &Product, filter: &str) -> bool {
    filter.is_empty() || product.id.to_string().contains(filter)
}

/// Order-preserving subset of `products` passing [`matches_filter`].
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], filter: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches_filter(p, filter)).collect()
}

/// Page count for `item_count` items. Never less than one.
#[must_use]
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Index range covered by 1-based `page`, clipped to `len`.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Contiguous slice of `items` for 1-based `page`.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(page, page_size, items.len())]
}

/// Pager caption, e.g. `Page 2 of 3`.
#[must_use]
pub fn page_label(page: usize, total_pages: usize) -> String {
    format!("Page {page} of {total_pages}")
}

/// Rows and pager metadata for one render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogView {
    /// Products on the current page.
    pub rows: Vec<Product>,
    /// Current 1-based page.
    pub page: usize,
    /// Page count of the filtered list.
    pub total_pages: usize,
    /// Number of products passing the filter, across all pages.
    pub matched: usize,
}

impl CatalogView {
    /// Compute the view for `products` under `filter` at `page`.
    #[must_use]
    pub fn compute(products: &[Product], filter: &str, page: usize, page_size: usize) -> Self {
        let filtered = filter_products(products, filter);
        let rows = paginate(&filtered, page, page_size)
            .iter()
            .map(|p| (*p).clone())
            .collect();
        Self {
            rows,
            page,
            total_pages: total_pages(filtered.len(), page_size),
            matched: filtered.len(),
        }
    }

    /// Page before the current one, if there is one.
    #[must_use]
    pub fn previous_page(&self) -> Option<usize> {
        if self.page > 1 { Some(self.page - 1) } else { None }
    }

    /// Page after the current one, if the filtered list has it.
    #[must_use]
    pub fn next_page(&self) -> Option<usize> {
        if self.page < self.total_pages { Some(self.page + 1) } else { None }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.previous_page().is_some()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_page().is_some()
    }

    #[must_use]
    pub fn page_label(&self) -> String {
        page_label(self.page, self.total_pages)
    }
}
