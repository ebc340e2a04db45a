use super::*;

fn model(id: i64) -> Model {
    Model { id, name: format!("m{id}"), category: None, brand: None, owner: None, manual: None }
}

#[test]
fn loading_state_starts_busy() {
    let state = PersonalModelsState::loading();
    assert!(state.loading);
    assert!(state.models.is_empty());
}

#[test]
fn remove_drops_only_matching_id() {
    let mut state = PersonalModelsState::loading();
    state.receive(vec![model(1), model(2), model(3)]);
    assert!(!state.loading);

    assert!(state.begin_delete(2));
    state.remove(2);

    assert_eq!(state.models.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(state.deleting, None);
}

#[test]
fn remove_unknown_id_leaves_list_untouched() {
    let mut state = PersonalModelsState::default();
    state.receive(vec![model(1), model(2)]);
    state.remove(9);
    assert_eq!(state.models.len(), 2);
}

#[test]
fn begin_delete_refuses_while_pending() {
    let mut state = PersonalModelsState::default();
    assert!(state.begin_delete(1));
    assert!(state.is_deleting(1));
    assert!(!state.begin_delete(2));
    assert!(!state.is_deleting(2));
}

#[test]
fn fail_records_message_and_clears_pending_delete() {
    let mut state = PersonalModelsState::default();
    state.begin_delete(1);
    state.fail(DELETE_FAILED.to_owned());
    assert_eq!(state.error.as_deref(), Some(DELETE_FAILED));
    assert_eq!(state.deleting, None);
}

#[test]
fn download_failure_shows_server_message() {
    let mut state = PersonalModelsState::default();
    let error = ApiError::Status { status: 404, message: Some("Manual not found".to_owned()) };
    state.fail_download(Some(&error));
    assert_eq!(state.error.as_deref(), Some("Manual not found"));
}

#[test]
fn download_failure_without_server_message_uses_fallback() {
    let mut state = PersonalModelsState::default();
    state.fail_download(Some(&ApiError::Status { status: 500, message: None }));
    assert_eq!(state.error.as_deref(), Some(DOWNLOAD_FAILED));

    state.fail_download(None);
    assert_eq!(state.error.as_deref(), Some(DOWNLOAD_FAILED));
}
