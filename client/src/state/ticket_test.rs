use leptos::reactive::owner::Owner;

use super::*;

fn ticket(full_name: &str, email: &str, github_username: &str) -> TicketRequest {
    TicketRequest {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        github_username: github_username.to_owned(),
        avatar: None,
    }
}

fn with_avatar_url(mut ticket: TicketRequest, url: Option<&str>) -> TicketRequest {
    ticket.avatar = Some(AvatarRef {
        file_name: "me.png".to_owned(),
        mime_type: "image/png".to_owned(),
        size: 1_024,
        url: url.map(str::to_owned),
    });
    ticket
}

// =============================================================
// TicketState
// =============================================================

#[test]
fn ticket_state_default_has_no_ticket() {
    assert!(TicketState::default().get().is_none());
}

#[test]
fn set_stores_ticket_and_returns_none_first_time() {
    let mut state = TicketState::default();
    let previous = state.set(ticket("Jane Doe", "jane@example.com", "janedoe"));
    assert!(previous.is_none());
    assert_eq!(state.get().map(|t| t.full_name.as_str()), Some("Jane Doe"));
}

#[test]
fn set_replaces_rather_than_merges() {
    let mut state = TicketState::default();
    state.set(ticket("Jane Doe", "jane@example.com", "janedoe"));
    let previous = state.set(ticket("", "sam@example.com", ""));
    assert_eq!(previous.map(|t| t.email), Some("jane@example.com".to_owned()));
    let current = state.get().unwrap();
    assert_eq!(current.email, "sam@example.com");
    assert_eq!(current.github_username, "");
}

#[test]
fn resubmitting_same_values_yields_identical_ticket() {
    let mut state = TicketState::default();
    let submitted = ticket("Jane Doe", "jane@example.com", "janedoe");
    state.set(submitted.clone());
    let previous = state.set(submitted.clone());
    assert_eq!(previous.as_ref(), Some(&submitted));
    assert_eq!(state.get(), Some(&submitted));
}

#[test]
fn clear_returns_previous_and_empties_slot() {
    let mut state = TicketState::default();
    state.set(ticket("Jane Doe", "jane@example.com", "janedoe"));
    assert!(state.clear().is_some());
    assert!(state.get().is_none());
    assert!(state.clear().is_none());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    assert_eq!(ticket("Jane Doe", "jane@example.com", "").display_name(), "Jane Doe");
}

#[test]
fn display_name_falls_back_to_email_when_blank() {
    assert_eq!(ticket("", "jane@example.com", "").display_name(), "jane@example.com");
    assert_eq!(ticket("   ", "jane@example.com", "").display_name(), "jane@example.com");
}

#[test]
fn github_handle_hidden_when_empty() {
    assert_eq!(ticket("", "a@b.co", "").github_handle(), None);
    assert_eq!(ticket("", "a@b.co", "janedoe").github_handle(), Some("janedoe"));
}

#[test]
fn avatar_src_defaults_without_avatar() {
    assert_eq!(ticket("Jane Doe", "jane@example.com", "janedoe").avatar_src(), DEFAULT_AVATAR_URL);
}

#[test]
fn avatar_src_defaults_when_url_missing() {
    let t = with_avatar_url(ticket("Jane Doe", "jane@example.com", ""), None);
    assert_eq!(t.avatar_src(), DEFAULT_AVATAR_URL);
}

#[test]
fn avatar_src_uses_object_url() {
    let t = with_avatar_url(ticket("Jane Doe", "jane@example.com", ""), Some("blob:abc"));
    assert_eq!(t.avatar_src(), "blob:abc");
}

// =============================================================
// Object URL release
// =============================================================

#[test]
fn released_url_none_without_previous() {
    let current = ticket("Jane Doe", "jane@example.com", "");
    assert_eq!(released_avatar_url(None, Some(&current)), None);
}

#[test]
fn released_url_returned_when_replaced() {
    let previous = with_avatar_url(ticket("Jane Doe", "jane@example.com", ""), Some("blob:old"));
    let current = with_avatar_url(ticket("Jane Doe", "jane@example.com", ""), Some("blob:new"));
    assert_eq!(released_avatar_url(Some(previous), Some(&current)), Some("blob:old".to_owned()));
}

#[test]
fn released_url_returned_when_new_ticket_has_no_avatar() {
    let previous = with_avatar_url(ticket("Jane Doe", "jane@example.com", ""), Some("blob:old"));
    let current = ticket("Jane Doe", "jane@example.com", "");
    assert_eq!(released_avatar_url(Some(previous), Some(&current)), Some("blob:old".to_owned()));
}

#[test]
fn released_url_kept_when_still_referenced() {
    let previous = with_avatar_url(ticket("Jane Doe", "jane@example.com", ""), Some("blob:same"));
    let current = previous.clone();
    assert_eq!(released_avatar_url(Some(previous), Some(&current)), None);
}

#[test]
fn released_url_returned_on_clear() {
    let previous = with_avatar_url(ticket("", "jane@example.com", ""), Some("blob:old"));
    assert_eq!(released_avatar_url(Some(previous), None), Some("blob:old".to_owned()));
}

// =============================================================
// Signal helpers
// =============================================================

#[test]
fn store_then_clear_through_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let tickets = RwSignal::new(TicketState::default());
        store_ticket(tickets, ticket("Jane Doe", "jane@example.com", "janedoe"));
        let stored = tickets.with_untracked(|s| s.get().map(|t| t.display_name().to_owned()));
        assert_eq!(stored, Some("Jane Doe".to_owned()));
        clear_ticket(tickets);
        assert!(tickets.with_untracked(|s| s.get().is_none()));
    });
}
