use futures::executor::block_on;

use super::*;
use crate::net::request::{Method, RequestBody};
use crate::net::testing::Harness;

#[test]
fn paths_format_ids() {
    assert_eq!(brand_path(4), "/brands/4");
    assert_eq!(category_path(9), "/categories/9");
    assert_eq!(brand_categories_path(2), "/categories/brand/2");
}

#[test]
fn brands_decodes_list() {
    let h = Harness::new();
    h.transport.reply(200, r#"[{ "id": 1, "name": "Acme" }, { "id": 2, "name": "Zeta", "categories": [] }]"#);

    let brands = block_on(h.client.brands()).unwrap();

    assert_eq!(brands.len(), 2);
    assert_eq!(brands[1].categories, Some(Vec::new()));
    assert_eq!(h.transport.last().path, "/brands");
}

#[test]
fn brand_fetches_single_record() {
    let h = Harness::new();
    h.transport.reply(200, r#"{ "id": 3, "name": "Acme" }"#);

    let brand = block_on(h.client.brand(3)).unwrap();

    assert_eq!(brand.name, "Acme");
    assert_eq!(h.transport.last().path, "/brands/3");
}

#[test]
fn create_brand_posts_name_and_unwraps_envelope() {
    let h = Harness::logged_in("admin");
    h.transport.reply(201, r#"{ "data": { "id": 5, "name": "Nova" } }"#);

    let brand = block_on(h.client.create_brand("Nova")).unwrap();

    assert_eq!(brand.id, 5);
    let sent = h.transport.last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body, RequestBody::Json(serde_json::json!({ "name": "Nova" })));
}

#[test]
fn update_brand_puts_to_id_path() {
    let h = Harness::logged_in("admin");
    h.transport.reply(200, r#"{ "data": { "id": 5, "name": "Nova 2" } }"#);

    block_on(h.client.update_brand(5, "Nova 2")).unwrap();

    let sent = h.transport.last();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.path, "/brands/5");
}

#[test]
fn delete_brand_sends_delete() {
    let h = Harness::logged_in("admin");
    h.transport.reply(204, "");

    block_on(h.client.delete_brand(5)).unwrap();

    let sent = h.transport.last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.path, "/brands/5");
}

#[test]
fn categories_endpoints() {
    let h = Harness::new();
    h.transport
        .reply(200, r#"[{ "id": 1, "name": "Ovens", "brandId": 2 }]"#)
        .reply(200, r#"[{ "id": 1, "name": "Ovens", "brandId": 2 }]"#)
        .reply(200, r#"{ "id": 1, "name": "Ovens", "brandId": 2 }"#);

    let all = block_on(h.client.categories()).unwrap();
    let by_brand = block_on(h.client.categories_for_brand(2)).unwrap();
    let one = block_on(h.client.category(1)).unwrap();

    assert_eq!(all, by_brand);
    assert_eq!(one.brand_id, 2);
    assert_eq!(
        h.transport.sent_urls(),
        vec!["/api/categories", "/api/categories/brand/2", "/api/categories/1"]
    );
}

#[test]
fn create_and_update_category_send_brand_id() {
    let h = Harness::logged_in("admin");
    h.transport
        .reply(201, r#"{ "data": { "id": 8, "name": "Fridges", "brandId": 2 } }"#)
        .reply(200, r#"{ "data": { "id": 8, "name": "Fridges", "brandId": 3 } }"#);

    let created = block_on(h.client.create_category("Fridges", 2)).unwrap();
    let updated = block_on(h.client.update_category(8, "Fridges", 3)).unwrap();

    assert_eq!(created.brand_id, 2);
    assert_eq!(updated.brand_id, 3);
    let sent = h.transport.sent();
    assert_eq!(sent[0].body, RequestBody::Json(serde_json::json!({ "name": "Fridges", "brandId": 2 })));
    assert_eq!(sent[1].path, "/categories/8");
    assert_eq!(sent[1].body, RequestBody::Json(serde_json::json!({ "name": "Fridges", "brandId": 3 })));
}

#[test]
fn delete_category_sends_delete() {
    let h = Harness::logged_in("admin");
    h.transport.reply(200, "");

    block_on(h.client.delete_category(8)).unwrap();

    assert_eq!(h.transport.last().path, "/categories/8");
}
