//! Product list page: filter, table, pager, and detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It starts the single listing fetch when mounted in
//! the browser and derives the visible rows from `ProductsState` on every
//! change to the filter, page, or selection.

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::pagination::Pagination;
use crate::components::product_modal::ProductModal;
use crate::components::product_table::ProductTable;
use crate::state::products::ProductsState;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = expect_context::<RwSignal<ProductsState>>();

    // One fetch on mount; failures are logged and the list stays empty.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products().await {
            Ok(products) => {
                log::info!("loaded {} products", products.len());
                state.update(|s| s.finish_loading(products));
            }
            Err(e) => {
                log::error!("failed to load products: {e}");
                state.update(ProductsState::fail_loading);
            }
        }
    });

    let catalog_view = Memo::new(move |_| state.with(|s| s.catalog.view()));

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| {
            s.catalog.set_page(page);
        });
    });
    let on_close = Callback::new(move |()| state.update(|s| s.catalog.clear_selection()));

    let selected = move || state.with(|s| s.catalog.selected().cloned());

    view! {
        <div class="products-page">
            <FilterBar/>
            <ProductTable catalog_view=catalog_view/>
            <Pagination catalog_view=catalog_view on_page_change=on_page_change/>
            {move || selected().map(|product| view! { <ProductModal product=product on_close=on_close/> })}
        </div>
    }
}
