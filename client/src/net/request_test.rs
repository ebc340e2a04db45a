use super::*;

#[test]
fn new_request_defaults_to_empty_body_and_fixed_timeout() {
    let req = ApiRequest::get("/brands");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.body, RequestBody::Empty);
    assert!(req.headers.is_empty());
    assert_eq!(req.timeout, Duration::from_secs(300));
}

#[test]
fn url_joins_base_and_path_with_single_slash() {
    let req = ApiRequest::get("/models/public");
    assert_eq!(req.url("/api"), "/api/models/public");
    assert_eq!(req.url("/api/"), "/api/models/public");
    assert_eq!(req.url("http://backend:8080/api"), "http://backend:8080/api/models/public");
}

#[test]
fn header_replaces_case_insensitively() {
    let req = ApiRequest::get("/x")
        .header("authorization", "Bearer a")
        .header(AUTHORIZATION, "Bearer b");
    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.header_value("AUTHORIZATION"), Some("Bearer b"));
}

#[test]
fn json_body_serializes_value() {
    let req = ApiRequest::post("/brands")
        .json(&serde_json::json!({ "name": "Acme" }))
        .unwrap();
    assert_eq!(req.body, RequestBody::Json(serde_json::json!({ "name": "Acme" })));
}

#[test]
fn payload_len_sums_multipart_parts() {
    let body = RequestBody::Multipart(vec![
        FormPart::Text { name: "name".to_owned(), value: "abc".to_owned() },
        FormPart::File {
            name: "manualFile".to_owned(),
            file: ManualFile::new("a.pdf", "application/pdf", vec![1; 10]),
        },
    ]);
    assert_eq!(body.payload_len(), 13);
    assert_eq!(RequestBody::Empty.payload_len(), 0);
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn raw_response_success_range() {
    assert!(RawResponse { status: 204, body: Vec::new() }.is_success());
    assert!(!RawResponse { status: 302, body: Vec::new() }.is_success());
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("t0k"), "Bearer t0k");
}
