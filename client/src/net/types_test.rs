use super::*;

#[test]
fn model_decodes_public_model_with_null_owner() {
    let raw = r#"{
        "id": 7,
        "name": "WM-100",
        "category": { "id": 3, "name": "Washers", "brandId": 1 },
        "brand": { "id": 1, "name": "Acme" },
        "owner": null,
        "manual": { "id": 11, "fileName": "wm100.pdf" }
    }"#;
    let model: Model = serde_json::from_str(raw).unwrap();
    assert!(model.is_public());
    assert_eq!(model.category.as_ref().map(|c| c.brand_id), Some(1));
    assert_eq!(model.brand.as_ref().and_then(|b| b.categories.clone()), None);
    assert_eq!(model.manual_file_name(), "wm100.pdf");
    assert_eq!(model.caption(), "Acme | Washers");
}

#[test]
fn model_decodes_personal_model_without_relations() {
    let raw = r#"{ "id": 9, "name": "my-dryer", "owner": { "id": 2, "email": "a@b.com" } }"#;
    let model: Model = serde_json::from_str(raw).unwrap();
    assert!(!model.is_public());
    assert_eq!(model.manual_file_name(), "manual.pdf");
    assert_eq!(model.caption(), " | ");
}

#[test]
fn brand_decodes_embedded_categories() {
    let raw = r#"{ "id": 1, "name": "Acme", "categories": [{ "id": 4, "name": "Ovens", "brandId": 1 }] }"#;
    let brand: Brand = serde_json::from_str(raw).unwrap();
    let categories = brand.categories.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Ovens");
}

#[test]
fn chat_question_serializes_camel_case() {
    let body = serde_json::to_value(ChatQuestion { model_id: 5, question: "How?" }).unwrap();
    assert_eq!(body, serde_json::json!({ "modelId": 5, "question": "How?" }));
}

#[test]
fn chat_answer_defaults_missing_images_to_empty() {
    let answer: ChatAnswer = serde_json::from_str(r#"{ "answer": "Yes." }"#).unwrap();
    assert!(answer.images.is_empty());
    assert_eq!(answer.message, None);
}

#[test]
fn envelope_unwraps_data_field() {
    let raw = r#"{ "message": "created", "data": { "id": 3, "name": "Ovens", "brandId": 1 } }"#;
    let envelope: Envelope<Category> = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.data, Category { id: 3, name: "Ovens".to_owned(), brand_id: 1 });
}
