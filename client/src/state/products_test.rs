use super::*;
use catalog::ProductId;

fn product(id: u32) -> Product {
    Product { id: ProductId(id), name: format!("p{id}"), year: 2000, color: "#ffffff".to_owned() }
}

#[test]
fn products_state_defaults_to_loading() {
    let s = ProductsState::default();
    assert!(s.loading);
    assert!(s.catalog.products().is_empty());
    assert_eq!(s.catalog.page(), 1);
}

#[test]
fn finish_loading_stores_products() {
    let mut s = ProductsState::default();
    s.finish_loading(vec![product(1), product(2)]);
    assert!(!s.loading);
    assert_eq!(s.catalog.products().len(), 2);
    assert_eq!(s.catalog.view().rows.len(), 2);
}

#[test]
fn fail_loading_leaves_list_empty() {
    let mut s = ProductsState::default();
    s.fail_loading();
    assert!(!s.loading);
    assert!(s.catalog.view().rows.is_empty());
}
