use super::*;

#[test]
fn memory_session_lifecycle() {
    let session = Session::memory();
    assert!(!session.is_authenticated());

    session.begin("abc");
    assert_eq!(session.token(), Some("abc".to_owned()));
    assert!(session.is_authenticated());

    session.end();
    assert_eq!(session.token(), None);
}

#[test]
fn clones_share_the_same_store() {
    let session = Session::memory();
    let other = session.clone();
    session.begin("shared");
    assert_eq!(other.token(), Some("shared".to_owned()));
    other.end();
    assert!(!session.is_authenticated());
}

#[test]
fn memory_store_with_token_starts_authenticated() {
    let session = Session::new(Arc::new(MemoryCredentialStore::with_token("t")));
    assert_eq!(session.token(), Some("t".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_the_browser() {
    let session = Session::browser();
    session.begin("ignored");
    assert_eq!(session.token(), None);
    session.end();
}

#[test]
fn debug_does_not_print_token() {
    let session = Session::memory();
    session.begin("secret-token");
    let out = format!("{session:?}");
    assert!(!out.contains("secret-token"));
    assert!(out.contains("authenticated: true"));
}
