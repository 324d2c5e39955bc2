use super::*;
use catalog::ProductId;

fn product(color: &str) -> Product {
    Product { id: ProductId(5), name: "tigerlily".to_owned(), year: 2004, color: color.to_owned() }
}

#[test]
fn row_style_uses_product_color() {
    assert_eq!(row_style(&product("#E2583E")), "background-color: #E2583E");
}

#[test]
fn row_style_skips_unsafe_color() {
    assert_eq!(row_style(&product("red;display:none")), "");
}

#[test]
fn status_message_prefers_loading() {
    assert_eq!(status_message(true, true), Some("Loading products..."));
    assert_eq!(status_message(true, false), Some("Loading products..."));
}

#[test]
fn status_message_reports_empty_results() {
    assert_eq!(status_message(false, true), Some("No products match."));
}

#[test]
fn status_message_hidden_when_rows_present() {
    assert_eq!(status_message(false, false), None);
}
