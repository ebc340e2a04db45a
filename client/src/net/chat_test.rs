use futures::executor::block_on;

use super::*;
use crate::net::request::{Method, RequestBody};
use crate::net::error::ApiError;
use crate::net::testing::Harness;

#[test]
fn send_question_posts_model_and_question_only() {
    let h = Harness::new();
    h.transport
        .reply(200, r#"{ "answer": "Press and hold RESET for 3 seconds.", "images": [] }"#);

    let answer = block_on(h.client.send_question(5, "How do I reset the filter?")).unwrap();

    assert_eq!(answer.answer, "Press and hold RESET for 3 seconds.");
    assert!(answer.images.is_empty());
    let sent = h.transport.last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, "/chat/manual");
    assert_eq!(
        sent.body,
        RequestBody::Json(serde_json::json!({ "modelId": 5, "question": "How do I reset the filter?" }))
    );
}

#[test]
fn send_question_keeps_image_payloads() {
    let h = Harness::new();
    h.transport.reply(200, r#"{ "message": "ok", "answer": "See figure.", "images": ["iVBORw0KGgo="] }"#);

    let answer = block_on(h.client.send_question(1, "Where is the filter?")).unwrap();

    assert_eq!(answer.images, vec!["iVBORw0KGgo=".to_owned()]);
}

#[test]
fn send_question_maps_server_fault() {
    let h = Harness::new();
    h.transport.reply(500, "");

    let err = block_on(h.client.send_question(1, "?")).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 500, message: None });
}
