//! Results page showing the generated ticket.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached by client-side navigation after a successful submit. Loading the
//! route directly, or after "Start over", shows the no-ticket fallback.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::ticket_card::{NoTicket, TicketCard};
use crate::state::ticket::{TicketState, clear_ticket};

#[component]
pub fn TicketPage() -> impl IntoView {
    let tickets = expect_context::<RwSignal<TicketState>>();

    // The router handles the link's navigation; the click only empties the slot.
    let on_start_over = move |_: leptos::ev::MouseEvent| clear_ticket(tickets);

    let summary = move || tickets.with(|state| state.get().map(|t| (t.display_name().to_owned(), t.email.clone())));

    view! {
        <Title text="Coding Conf 2025 | Your Ticket"/>
        {move || {
            let Some((name, email)) = summary() else {
                return view! { <NoTicket/> }.into_any();
            };
            view! {
                <section class="ticket-page">
                    <div class="page-intro">
                        <h1 class="page-title">
                            "Congrats, "
                            <span class="page-title__highlight">{name}</span>
                            "!"
                            <span class="page-title__line">"Your ticket is ready."</span>
                        </h1>
                        <p class="page-subtitle">
                            "We've emailed your ticket to "
                            <span class="page-subtitle__email">{email}</span>
                            " and will send updates in the run up to the event."
                        </p>
                    </div>
                    <TicketCard/>
                    <a class="ticket-page__start-over" href="/" on:click=on_start_over>
                        "Start over"
                    </a>
                </section>
            }
            .into_any()
        }}
    }
}
