use futures::executor::block_on;

use super::*;
use crate::net::error::TransportError;
use crate::net::request::{Method, RequestBody};
use crate::net::testing::Harness;

#[test]
fn login_posts_credentials_and_stores_token() {
    let h = Harness::new();
    h.transport.reply(200, r#"{ "token": "t-1" }"#);

    let response = block_on(h.client.login("a@b.com", "secret1")).unwrap();

    assert_eq!(response.token.as_deref(), Some("t-1"));
    assert_eq!(h.session().token(), Some("t-1".to_owned()));
    let sent = h.transport.last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, "/users/login");
    assert_eq!(
        sent.body,
        RequestBody::Json(serde_json::json!({ "email": "a@b.com", "password": "secret1" }))
    );
}

#[test]
fn requests_after_login_carry_the_new_token() {
    let h = Harness::new();
    h.transport.reply(200, r#"{ "token": "fresh" }"#).reply(200, "[]");

    block_on(h.client.login("a@b.com", "secret1")).unwrap();
    block_on(h.client.personal_models()).unwrap();

    assert_eq!(h.transport.last().header_value("Authorization"), Some("Bearer fresh"));
}

#[test]
fn login_without_token_leaves_session_empty() {
    let h = Harness::new();
    h.transport.reply(200, "{}");

    block_on(h.client.login("a@b.com", "pw")).unwrap();

    assert!(!h.session().is_authenticated());
}

#[test]
fn login_failure_surfaces_server_message() {
    let h = Harness::new();
    h.transport.reply(400, r#"{ "message": "Wrong password" }"#);

    let err = block_on(h.client.login("a@b.com", "nope")).unwrap_err();

    assert_eq!(err.user_message("Login failed."), "Wrong password");
    assert!(!h.session().is_authenticated());
}

#[test]
fn signup_posts_credentials() {
    let h = Harness::new();
    h.transport.reply(201, r#"{ "id": 1, "email": "a@b.com" }"#);

    block_on(h.client.signup("a@b.com", "secret1")).unwrap();

    let sent = h.transport.last();
    assert_eq!(sent.path, "/users/signup");
    assert_eq!(
        sent.body,
        RequestBody::Json(serde_json::json!({ "email": "a@b.com", "password": "secret1" }))
    );
}

#[test]
fn logout_clears_token_on_success() {
    let h = Harness::logged_in("t");
    h.transport.reply(200, "{}");

    block_on(h.client.logout()).unwrap();

    assert_eq!(h.transport.last().path, "/users/logout");
    assert!(!h.session().is_authenticated());
}

#[test]
fn logout_clears_token_even_when_request_fails() {
    let h = Harness::logged_in("t");
    h.transport.fail(TransportError::Network("offline".to_owned()));

    let err = block_on(h.client.logout()).unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert!(!h.session().is_authenticated());
}
