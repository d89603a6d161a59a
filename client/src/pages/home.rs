//! Landing page hosting the registration form.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::ticket_form::TicketForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Coding Conf 2025 | Get Your Ticket"/>
        <Meta name="description" content="Secure your spot at next year's biggest coding conference."/>
        <section class="home-page">
            <div class="page-intro">
                <h1 class="page-title">"Your Journey to Coding Conf 2025 Starts Here!"</h1>
                <p class="page-subtitle">"Secure your spot at next year's biggest coding conference."</p>
            </div>
            <TicketForm/>
        </section>
    }
}
