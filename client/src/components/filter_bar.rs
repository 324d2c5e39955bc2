//! Id filter input above the product table.

use leptos::prelude::*;

use crate::state::products::ProductsState;

/// Text input bound to the catalog filter. Every keystroke re-filters and
/// returns to the first page.
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = expect_context::<RwSignal<ProductsState>>();

    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__input"
                type="text"
                placeholder="Filter by id"
                prop:value=move || state.with(|s| s.catalog.filter().to_owned())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| s.catalog.set_filter(text));
                }
            />
        </div>
    }
}
