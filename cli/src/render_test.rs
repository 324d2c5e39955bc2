use super::*;
use catalog::ProductId;

fn cerulean() -> Product {
    Product { id: ProductId(1), name: "cerulean".to_owned(), year: 2000, color: "#98B2D1".to_owned() }
}

#[test]
fn render_page_lists_rows_and_label() {
    let view = CatalogView { rows: vec![cerulean()], page: 1, total_pages: 2, matched: 6 };
    let out = render_page(&view);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Id") && lines[0].contains("Name") && lines[0].contains("Year"));
    assert!(lines[1].trim_start().starts_with("1  cerulean"));
    assert!(lines[1].ends_with("2000"));
    assert_eq!(lines[2], "Page 1 of 2");
}

#[test]
fn render_page_marks_empty_result() {
    let view = CatalogView { rows: Vec::new(), page: 1, total_pages: 1, matched: 0 };
    let out = render_page(&view);
    assert!(out.contains("(no products match)"));
    assert!(out.ends_with("Page 1 of 1"));
}

#[test]
fn render_detail_matches_modal_fields() {
    assert_eq!(render_detail(&cerulean()), "cerulean\nID: 1\nYear: 2000\nColor: #98B2D1");
}
