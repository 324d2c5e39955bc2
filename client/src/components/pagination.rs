//! Previous/next pager under the product table.

use catalog::CatalogView;
use leptos::prelude::*;

/// Pager with `<` / `>` buttons and a `Page X of Y` caption.
///
/// Buttons are disabled at the bounds and only request pages the current
/// view reports as reachable.
#[component]
pub fn Pagination(catalog_view: Memo<CatalogView>, on_page_change: Callback<usize>) -> impl IntoView {
    let on_previous = move |_| {
        if let Some(page) = catalog_view.with(CatalogView::previous_page) {
            on_page_change.run(page);
        }
    };
    let on_next = move |_| {
        if let Some(page) = catalog_view.with(CatalogView::next_page) {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                title="Previous page"
                on:click=on_previous
                disabled=move || !catalog_view.with(CatalogView::has_previous)
            >
                "<"
            </button>
            <span class="pagination__label">{move || catalog_view.with(CatalogView::page_label)}</span>
            <button
                class="pagination__button"
                title="Next page"
                on:click=on_next
                disabled=move || !catalog_view.with(CatalogView::has_next)
            >
                ">"
            </button>
        </div>
    }
}
