//! The session's submitted ticket.
//!
//! DESIGN
//! ======
//! `TicketState` is a single slot provided by `App` as an
//! `RwSignal<TicketState>` context. Only the ticket form stores a ticket;
//! the results page may clear it. Each record owns at most one avatar object
//! URL; replacing or clearing the record hands the old URL back so it can be
//! revoked.

#[cfg(test)]
#[path = "ticket_test.rs"]
mod ticket_test;

use leptos::prelude::*;

use crate::util::file;

/// Placeholder shown when a ticket has no usable avatar.
pub const DEFAULT_AVATAR_URL: &str = "/images/image-avatar.svg";

/// Avatar attached to a ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarRef {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    /// Object URL for the uploaded file, if one could be created.
    pub url: Option<String>,
}

/// A validated registration produced by the ticket form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketRequest {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub avatar: Option<AvatarRef>,
}

impl TicketRequest {
    /// Full name when given, otherwise the email.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() { &self.email } else { &self.full_name }
    }

    pub fn github_handle(&self) -> Option<&str> {
        let handle = self.github_username.trim();
        (!handle.is_empty()).then_some(handle)
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_ref().and_then(|a| a.url.as_deref())
    }

    /// Image source for the ticket card, falling back to the placeholder.
    pub fn avatar_src(&self) -> &str {
        self.avatar_url().unwrap_or(DEFAULT_AVATAR_URL)
    }
}

/// Holds at most one ticket for the browser session.
#[derive(Clone, Debug, Default)]
pub struct TicketState {
    ticket: Option<TicketRequest>,
}

impl TicketState {
    pub fn get(&self) -> Option<&TicketRequest> {
        self.ticket.as_ref()
    }

    /// Replace the current ticket, returning the previous one.
    pub fn set(&mut self, ticket: TicketRequest) -> Option<TicketRequest> {
        self.ticket.replace(ticket)
    }

    /// Reset to no ticket, returning the previous one.
    pub fn clear(&mut self) -> Option<TicketRequest> {
        self.ticket.take()
    }
}

/// Object URL of `previous` that `current` no longer references.
pub fn released_avatar_url(previous: Option<TicketRequest>, current: Option<&TicketRequest>) -> Option<String> {
    let url = previous?.avatar?.url?;
    if current.and_then(TicketRequest::avatar_url) == Some(url.as_str()) {
        return None;
    }
    Some(url)
}

/// Store `ticket` in the shared slot and revoke the replaced avatar URL.
pub fn store_ticket(tickets: RwSignal<TicketState>, ticket: TicketRequest) {
    let released = tickets
        .try_update(|state| {
            let previous = state.set(ticket);
            released_avatar_url(previous, state.get())
        })
        .flatten();
    log::info!("ticket stored (replaced avatar url: {})", released.is_some());
    if let Some(url) = released {
        file::revoke_object_url(&url);
    }
}

/// Empty the shared slot and revoke the cleared avatar URL.
pub fn clear_ticket(tickets: RwSignal<TicketState>) {
    let released = tickets.try_update(|state| released_avatar_url(state.clear(), None)).flatten();
    log::info!("ticket cleared");
    if let Some(url) = released {
        file::revoke_object_url(&url);
    }
}
