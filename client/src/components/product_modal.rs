//! Detail overlay for the selected product.

#[cfg(test)]
#[path = "product_modal_test.rs"]
mod product_modal_test;

use catalog::Product;
use leptos::prelude::*;

/// Modal showing one product's name, id, year, and color.
///
/// Closes on the Close button, a backdrop click, or Escape. The Escape
/// listener sits on the window because the row click that opens the modal
/// leaves focus on `<body>`.
#[component]
pub fn ProductModal(product: Product, on_close: Callback<()>) -> impl IntoView {
    let [id_line, year_line, color_line] = product.detail_lines();

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if dismiss_on_key(&ev.key(), || on_close.run(())) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <button class="modal__close" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
                <div class="modal__body">
                    <h3>{product.name}</h3>
                    <p>{id_line}</p>
                    <p>{year_line}</p>
                    <p>{color_line}</p>
                </div>
            </div>
        </div>
    }
}

/// Keys that dismiss the modal.
pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

/// Run `close` when `key` dismisses the modal. Returns whether it ran.
pub fn dismiss_on_key(key: &str, close: impl FnOnce()) -> bool {
    if is_close_key(key) {
        close();
        true
    } else {
        false
    }
}
