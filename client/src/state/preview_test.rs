use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn preview_default_is_empty() {
    let state = PreviewState::default();
    assert!(!state.has_preview());
    assert!(!state.is_pending());
    assert!(!state.drag_active);
    assert_eq!(state.generation(), 0);
}

// =============================================================
// Read generations
// =============================================================

#[test]
fn finished_read_publishes_preview() {
    let mut state = PreviewState::default();
    let generation = state.begin_read();
    assert!(state.is_pending());
    assert!(state.finish_read(generation, "data:image/png;base64,AAAA".to_owned()));
    assert_eq!(state.data_url(), Some("data:image/png;base64,AAAA"));
    assert!(!state.is_pending());
}

#[test]
fn stale_read_is_discarded_after_newer_selection() {
    let mut state = PreviewState::default();
    let first = state.begin_read();
    let second = state.begin_read();

    assert!(state.finish_read(second, "data:second".to_owned()));
    assert!(!state.finish_read(first, "data:first".to_owned()));
    assert_eq!(state.data_url(), Some("data:second"));
}

#[test]
fn stale_read_cannot_clobber_pending_newer_read() {
    let mut state = PreviewState::default();
    let first = state.begin_read();
    let _second = state.begin_read();

    assert!(!state.finish_read(first, "data:first".to_owned()));
    assert!(!state.has_preview());
    assert!(state.is_pending());
}

#[test]
fn remove_invalidates_in_flight_read() {
    let mut state = PreviewState::default();
    let generation = state.begin_read();
    state.remove();
    assert!(!state.finish_read(generation, "data:late".to_owned()));
    assert!(!state.has_preview());
    assert!(!state.is_pending());
}

#[test]
fn remove_clears_published_preview() {
    let mut state = PreviewState::default();
    let generation = state.begin_read();
    state.finish_read(generation, "data:x".to_owned());
    state.remove();
    assert_eq!(state.data_url(), None);
}

#[test]
fn failed_read_settles_current_generation() {
    let mut state = PreviewState::default();
    let generation = state.begin_read();
    assert!(state.fail_read(generation));
    assert!(!state.is_pending());
    assert!(!state.has_preview());
}

#[test]
fn stale_failure_leaves_newer_read_pending() {
    let mut state = PreviewState::default();
    let first = state.begin_read();
    let _second = state.begin_read();
    assert!(!state.fail_read(first));
    assert!(state.is_pending());
}

// =============================================================
// Prompt
// =============================================================

#[test]
fn prompt_invites_upload_when_empty() {
    assert_eq!(PreviewState::default().prompt(), Some("Drag and drop or click to upload"));
}

#[test]
fn prompt_shows_drop_hint_while_dragging() {
    let mut state = PreviewState::default();
    state.drag_active = true;
    assert_eq!(state.prompt(), Some("Drop the file here ..."));
}

#[test]
fn prompt_hidden_with_preview() {
    let mut state = PreviewState::default();
    let generation = state.begin_read();
    state.finish_read(generation, "data:x".to_owned());
    assert_eq!(state.prompt(), None);
}
