use super::*;

#[test]
fn enter_sends() {
    assert!(should_send_on_key("Enter", false, false));
}

#[test]
fn shift_enter_inserts_newline() {
    assert!(!should_send_on_key("Enter", true, false));
}

#[test]
fn composition_and_other_keys_do_not_send() {
    assert!(!should_send_on_key("Enter", false, true));
    assert!(!should_send_on_key("a", false, false));
}
