use super::*;

#[test]
fn parse_catalog_reads_array_of_items() {
    let body = r#"[
        {"id": 1, "title": "Jacket", "price": 55.99, "category": "men's clothing", "image": "a.jpg", "rating": {"rate": 4.7, "count": 500}},
        {"id": 2, "title": "Ring", "price": 9.99, "category": "jewelery", "image": "b.jpg", "rating": {"rate": 3.0, "count": 0}}
    ]"#;
    let items = parse_catalog(body).expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "1");
    assert!(items[0].in_stock());
    assert!(!items[1].in_stock());
}

#[test]
fn parse_catalog_accepts_empty_array() {
    assert!(parse_catalog("[]").expect("items").is_empty());
}

#[test]
fn parse_catalog_rejects_object_body() {
    let err = parse_catalog(r#"{"error": "nope"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn catalog_error_messages_include_detail() {
    assert_eq!(CatalogError::Status { status: 503 }.to_string(), "catalog response error: status 503");
    assert_eq!(
        CatalogError::Request("connection reset".to_owned()).to_string(),
        "catalog request failed: connection reset"
    );
}

#[test]
fn parse_catalog_keeps_record_with_null_variants() {
    let body = r#"[
        {"id": 1, "title": "Jacket", "price": 55.99, "rating": {"rate": 4.7, "count": 500}},
        {"id": 2, "title": "Ring", "price": 9.99, "variants": null, "rating": {"rate": 3.0, "count": 2}}
    ]"#;
    let items = parse_catalog(body).expect("items");
    assert_eq!(items.len(), 2);
    assert!(items[1].variants.is_empty());
    assert!(items[1].in_stock());
}

#[test]
fn parse_catalog_keeps_record_with_null_title() {
    let body = r#"[
        {"id": 1, "title": "Jacket", "price": 55.99},
        {"id": 2, "title": null, "image": null, "category": null, "price": 9.99}
    ]"#;
    let items = parse_catalog(body).expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title, "");
    assert_eq!(items[1].category, "");
}

#[test]
fn parse_catalog_keeps_record_with_string_count() {
    let body = r#"[
        {"id": 1, "title": "Jacket", "price": 55.99, "rating": {"rate": 4.7, "count": 500}},
        {"id": 2, "title": "Ring", "price": 9.99, "rating": {"rate": "3.0", "count": "5"}}
    ]"#;
    let items = parse_catalog(body).expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].stock_count(), 5);
}

#[test]
fn parse_catalog_keeps_record_without_id() {
    let body = r#"[
        {"id": 1, "title": "Jacket", "price": 55.99},
        {"title": "Ring", "price": 9.99}
    ]"#;
    let items = parse_catalog(body).expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "1");
    assert_eq!(items[1].id, "");
}

#[test]
fn parse_catalog_skips_non_object_records() {
    let body = r#"[null, 42, {"id": 3, "title": "Hat", "price": 12.0}, "junk"]"#;
    let items = parse_catalog(body).expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "3");
}
