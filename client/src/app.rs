//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{home::HomePage, ticket::TicketPage};
use crate::state::ticket::TicketState;
use crate::util::file;
use crate::util::validation::ValidationPolicy;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session's `TicketState` and the form's `ValidationPolicy`, both
/// provided as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let tickets = RwSignal::new(TicketState::default());
    provide_context(tickets);
    provide_context(ValidationPolicy::default());

    on_cleanup(move || {
        let url = tickets
            .try_with_untracked(|state| state.get().and_then(|t| t.avatar_url().map(str::to_owned)))
            .flatten();
        if let Some(url) = url {
            file::revoke_object_url(&url);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ticket.css"/>
        <Title text="Coding Conf 2025"/>

        <Router>
            <Header/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("ticket") view=TicketPage/>
                </Routes>
            </main>
        </Router>
    }
}
