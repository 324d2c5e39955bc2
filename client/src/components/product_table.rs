//! Product table for the current page of filtered results.
//!
//! DESIGN
//! ======
//! Rows come from the memoized `CatalogView`, so the table never filters or
//! slices on its own. Row clicks select by id through `CatalogState`.

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

use catalog::{CatalogView, Product};
use leptos::prelude::*;

use crate::state::products::ProductsState;

/// Table of the visible rows with Id / Name / Year columns.
#[component]
pub fn ProductTable(catalog_view: Memo<CatalogView>) -> impl IntoView {
    let state = expect_context::<RwSignal<ProductsState>>();

    let status = move || {
        let loading = state.with(|s| s.loading);
        let empty = catalog_view.with(|v| v.rows.is_empty());
        status_message(loading, empty)
    };

    view! {
        <div class="product-table">
            <table class="product-table__table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Name"</th>
                        <th>"Year"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        catalog_view
                            .get()
                            .rows
                            .into_iter()
                            .map(|product| {
                                let id = product.id;
                                let style = row_style(&product);
                                view! {
                                    <tr
                                        class="product-table__row"
                                        style=style
                                        on:click=move |_| {
                                            state.update(|s| {
                                                s.catalog.select(id);
                                            });
                                        }
                                    >
                                        <td>{product.id.to_string()}</td>
                                        <td>{product.name}</td>
                                        <td>{product.year.to_string()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {move || status().map(|msg| view! { <p class="product-table__status">{msg}</p> })}
        </div>
    }
}

/// Inline style painting the row in the product's color, empty when the
/// color is not a plain CSS color token.
pub fn row_style(product: &Product) -> String {
    product
        .swatch()
        .map(|color| format!("background-color: {color}"))
        .unwrap_or_default()
}

/// Placeholder text under the table, if any.
pub fn status_message(loading: bool, empty: bool) -> Option<&'static str> {
    if loading {
        Some("Loading products...")
    } else if empty {
        Some("No products match.")
    } else {
        None
    }
}
