//! REST helper for the product listing endpoint.
//!
//! Client-side (hydrate): one real HTTP GET via `gloo-net`.
//! Server-side (SSR): a stub error, since the list is only fetched in the
//! browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)`; the caller logs them and carries on
//! with an empty list. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{DEFAULT_ENDPOINT, Product};

/// Listing URL, overridable at build time with `CATALOG_ENDPOINT`.
pub fn products_endpoint() -> &'static str {
    option_env!("CATALOG_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT)
}

#[cfg(any(test, feature = "hydrate"))]
fn product_request_failed_message(status: u16) -> String {
    format!("product request failed: {status}")
}

/// Fetch the full product list.
///
/// # Errors
///
/// Returns an error string if the request fails, the endpoint answers with a
/// non-2xx status, or the body is not a product listing.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(products_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(product_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        catalog::ProductListing::from_json(&body)
            .map(catalog::ProductListing::into_products)
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
