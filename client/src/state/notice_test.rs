use super::*;

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_defaults_to_error() {
    assert_eq!(Severity::default(), Severity::Error);
}

#[test]
fn severity_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
    let parsed: Severity = serde_json::from_str("\"success\"").unwrap();
    assert_eq!(parsed, Severity::Success);
}

#[test]
fn severity_as_str_matches_css_modifiers() {
    assert_eq!(Severity::Error.as_str(), "error");
    assert_eq!(Severity::Warning.as_str(), "warning");
    assert_eq!(Severity::Info.as_str(), "info");
    assert_eq!(Severity::Success.as_str(), "success");
}

// =============================================================
// NoticeState
// =============================================================

#[test]
fn notice_state_default_is_hidden() {
    let state = NoticeState::default();
    assert!(!state.open);
    assert!(state.message.is_empty());
}

#[test]
fn show_opens_with_message_and_severity() {
    let mut state = NoticeState::default();
    state.show(Notice::new("Saved", Severity::Success));
    assert!(state.open);
    assert_eq!(state.message, "Saved");
    assert_eq!(state.severity, Severity::Success);
}

#[test]
fn second_show_replaces_first() {
    let mut state = NoticeState::default();
    state.show(Notice::new("first", Severity::Error));
    state.show(Notice::new("second", Severity::Warning));
    assert!(state.open);
    assert_eq!(state.message, "second");
    assert_eq!(state.severity, Severity::Warning);
}

#[test]
fn acknowledge_hides_and_clears_message() {
    let mut state = NoticeState::default();
    state.show(Notice::new("boom", Severity::Error));
    state.acknowledge();
    assert!(!state.open);
    assert!(state.message.is_empty());
}

#[test]
fn acknowledge_on_hidden_state_is_harmless() {
    let mut state = NoticeState::default();
    state.acknowledge();
    state.acknowledge();
    assert!(!state.open);
    assert!(state.message.is_empty());
}

#[test]
fn expire_hides_only_the_matching_notification() {
    let mut state = NoticeState::default();
    state.show(Notice::new("first", Severity::Info));
    let stale = state.seq;
    state.show(Notice::new("second", Severity::Info));

    assert!(!state.expire(stale));
    assert!(state.open);
    assert_eq!(state.message, "second");

    let live = state.seq;
    assert!(state.expire(live));
    assert!(!state.open);
}

#[test]
fn expire_after_acknowledge_is_noop() {
    let mut state = NoticeState::default();
    state.show(Notice::new("x", Severity::Error));
    let seq = state.seq;
    state.acknowledge();
    assert!(!state.expire(seq));
}
