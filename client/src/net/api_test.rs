use super::*;

#[test]
fn products_endpoint_defaults_to_listing_url() {
    if option_env!("CATALOG_ENDPOINT").is_none() {
        assert_eq!(products_endpoint(), "https://reqres.in/api/products");
    }
}

#[test]
fn product_request_failed_message_formats_status() {
    assert_eq!(product_request_failed_message(503), "product request failed: 503");
}

