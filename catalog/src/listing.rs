//! JSON envelope returned by the product listing endpoint.
//!
//! The endpoint wraps products in `{ "data": [...] }` alongside its own paging
//! fields. Those fields are ignored: paging happens on the client.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Fixed product listing endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/products";

/// Error returned by [`ProductListing::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// The body was not a JSON object with a `data` array of products.
    #[error("failed to decode product listing: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Response body of the listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    pub data: Vec<Product>,
}

impl ProductListing {
    /// Decode a listing response body.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Decode`] when the body is not valid JSON or
    /// lacks a well-formed `data` array.
    pub fn from_json(body: &str) -> Result<Self, ListingError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Take ownership of the product records.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.data
    }
}
