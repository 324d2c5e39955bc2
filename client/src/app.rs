//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::products::ProductsPage;
use crate::state::products::ProductsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the product state context and mounts the product list page at
/// the site root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let products = RwSignal::new(ProductsState::default());
    provide_context(products);

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog.css"/>
        <Title text="Products"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductsPage/>
            </Routes>
        </Router>
    }
}
