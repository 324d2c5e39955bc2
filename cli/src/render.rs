//! Plain-text rendering of catalog views.

use std::fmt::Write as _;

use catalog::{CatalogView, Product};

/// Table of the view's rows followed by the pager caption.
pub fn render_page(view: &CatalogView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<24}  {:>4}", "Id", "Name", "Year");
    for product in &view.rows {
        let _ = writeln!(out, "{:>4}  {:<24}  {:>4}", product.id, product.name, product.year);
    }
    if view.rows.is_empty() {
        out.push_str("(no products match)\n");
    }
    out.push_str(&view.page_label());
    out
}

/// Name followed by the id, year, and color lines.
pub fn render_detail(product: &Product) -> String {
    let mut out = product.name.clone();
    for line in product.detail_lines() {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
