use super::*;

fn cerulean() -> Product {
    Product { id: ProductId(1), name: "cerulean".to_owned(), year: 2000, color: "#98B2D1".to_owned() }
}

#[test]
fn product_id_displays_as_decimal() {
    assert_eq!(ProductId(42).to_string(), "42");
}

#[test]
fn product_deserializes_and_ignores_unknown_fields() {
    let raw = r##"{"id":3,"name":"true red","year":2002,"color":"#BF1932","pantone_value":"19-1664"}"##;
    let product: Product = serde_json::from_str(raw).expect("product");
    assert_eq!(product.id, ProductId(3));
    assert_eq!(product.name, "true red");
    assert_eq!(product.year, 2002);
    assert_eq!(product.color, "#BF1932");
}

#[test]
fn product_id_serializes_as_bare_number() {
    let json = serde_json::to_value(cerulean()).expect("serialize");
    assert_eq!(json["id"], serde_json::json!(1));
}

#[test]
fn detail_lines_follow_modal_order() {
    let lines = cerulean().detail_lines();
    assert_eq!(lines, ["ID: 1".to_owned(), "Year: 2000".to_owned(), "Color: #98B2D1".to_owned()]);
}

#[test]
fn swatch_accepts_hex_colors() {
    for color in ["#abc", "#abcd", "#98B2D1", "#98B2D1FF"] {
        let product = Product { color: color.to_owned(), ..cerulean() };
        assert_eq!(product.swatch(), Some(color));
    }
}

#[test]
fn swatch_accepts_named_colors() {
    let product = Product { color: "teal".to_owned(), ..cerulean() };
    assert_eq!(product.swatch(), Some("teal"));
}

#[test]
fn swatch_rejects_style_injection() {
    for color in ["red; position: fixed", "#12345", "#zzzzzz", "", "url(x)"] {
        let product = Product { color: color.to_owned(), ..cerulean() };
        assert_eq!(product.swatch(), None, "{color:?} should be rejected");
    }
}
