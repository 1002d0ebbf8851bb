use super::*;

// =============================================================
// KeepMode
// =============================================================

#[test]
fn keep_mode_parses_known_values() {
    assert_eq!("last".parse::<KeepMode>(), Ok(KeepMode::Last));
    assert_eq!("none".parse::<KeepMode>(), Ok(KeepMode::None));
    assert_eq!("sometimes".parse::<KeepMode>(), Err("sometimes".to_owned()));
}

#[test]
fn keep_mode_default_is_last() {
    assert_eq!(KeepMode::default(), KeepMode::Last);
}

// =============================================================
// LiveQueryState
// =============================================================

#[test]
fn refresh_with_keep_last_retains_value() {
    let mut state = LiveQueryState { value: Some(vec![1]), is_loading: false };
    state.begin_refresh(KeepMode::Last);
    assert!(state.is_loading);
    assert_eq!(state.value, Some(vec![1]));
}

#[test]
fn refresh_with_keep_none_discards_value() {
    let mut state = LiveQueryState { value: Some(vec![1]), is_loading: false };
    state.begin_refresh(KeepMode::None);
    assert!(state.is_loading);
    assert!(state.value.is_none());
}

#[test]
fn successful_resolve_replaces_value() {
    let mut state = LiveQueryState { value: Some(vec![1]), is_loading: true };
    assert!(state.resolve(Ok(vec![1, 2])).is_none());
    assert!(!state.is_loading);
    assert_eq!(state.value, Some(vec![1, 2]));
}

#[test]
fn failed_resolve_keeps_previous_value() {
    let mut state = LiveQueryState { value: Some(vec![1]), is_loading: true };
    let err = state.resolve(Err(ServiceError::Network("down".to_owned())));
    assert!(matches!(err, Some(ServiceError::Network(_))));
    assert!(!state.is_loading);
    assert_eq!(state.value, Some(vec![1]));
}

// =============================================================
// PollHandle
// =============================================================

#[test]
fn poll_handle_stop_is_shared_between_clones() {
    let handle = PollHandle { alive: std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true)) };
    let clone = handle.clone();
    clone.stop();
    assert!(!handle.is_alive());
}
