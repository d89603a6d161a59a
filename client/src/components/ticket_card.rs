//! Conference ticket card rendered from the session's ticket.

use leptos::prelude::*;

use crate::components::icons::{GithubIcon, LogoMark};
use crate::state::ticket::TicketState;

pub const EVENT_NAME: &str = "Coding Conf";
pub const EVENT_DETAILS: &str = "Jan 31, 2025 / Austin, TX";
pub const TICKET_NUMBER: &str = "#01609";

/// Fallback shown wherever a ticket is expected but none was submitted.
#[component]
pub fn NoTicket() -> impl IntoView {
    view! { <p class="ticket-missing">"No ticket found"</p> }
}

#[component]
pub fn TicketCard() -> impl IntoView {
    let tickets = expect_context::<RwSignal<TicketState>>();

    move || {
        let Some(ticket) = tickets.with(|state| state.get().cloned()) else {
            return view! { <NoTicket/> }.into_any();
        };
        let avatar_src = ticket.avatar_src().to_owned();
        let name = ticket.display_name().to_owned();
        let handle = ticket.github_handle().map(str::to_owned);

        view! {
            <article class="ticket">
                <div class="ticket__event">
                    <LogoMark class="ticket__mark"/>
                    <div class="ticket__event-text">
                        <p class="ticket__event-name">{EVENT_NAME}</p>
                        <p class="ticket__event-details">{EVENT_DETAILS}</p>
                    </div>
                </div>
                <div class="ticket__attendee">
                    <img class="ticket__avatar" src=avatar_src alt=""/>
                    <div class="ticket__attendee-text">
                        <p class="ticket__name">{name}</p>
                        {handle.map(|handle| {
                            view! {
                                <p class="ticket__github">
                                    <GithubIcon class="ticket__github-icon"/>
                                    <span>{handle}</span>
                                </p>
                            }
                        })}
                    </div>
                </div>
                <p class="ticket__number">{TICKET_NUMBER}</p>
            </article>
        }
        .into_any()
    }
}
