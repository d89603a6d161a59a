//! Registration form producing the session's ticket.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of `TicketState`. Submission validates every field; on
//! success the ticket is stored (with an object URL for the avatar) and the
//! router moves to `/ticket`. After the first attempt, errors are recomputed
//! live as fields change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::avatar_dropzone::{AvatarDropzone, AvatarField};
use crate::components::icons::InfoIcon;
use crate::state::ticket::{TicketState, store_ticket};
use crate::util::validation::{FieldError, FieldErrors, TicketDraft, ValidationPolicy, validate_ticket};

#[component]
pub fn TicketForm() -> impl IntoView {
    let tickets = expect_context::<RwSignal<TicketState>>();
    let policy = use_context::<ValidationPolicy>().unwrap_or_default();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let github_username = RwSignal::new(String::new());
    let avatar = AvatarField::new();
    let errors = RwSignal::new(FieldErrors::default());
    let attempted = RwSignal::new(false);

    let draft = move || TicketDraft {
        full_name: full_name.get(),
        email: email.get(),
        github_username: github_username.get(),
        avatar: avatar.selected.get(),
    };

    // Live revalidation once the user has tried to submit.
    Effect::new(move || {
        if !attempted.get() {
            return;
        }
        let next = validate_ticket(&draft(), policy).err().unwrap_or_default();
        avatar.error.set(next.avatar);
        errors.set(next);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        attempted.set(true);
        match validate_ticket(&untrack(draft), policy) {
            Ok(mut ticket) => {
                errors.set(FieldErrors::default());
                if let Some(attached) = ticket.avatar.as_mut() {
                    attached.url = avatar.object_url();
                }
                store_ticket(tickets, ticket);
                navigate("/ticket", NavigateOptions::default());
            }
            Err(field_errors) => {
                log::info!("ticket form rejected: {field_errors:?}");
                avatar.error.set(field_errors.avatar);
                errors.set(field_errors);
            }
        }
    };

    view! {
        <form class="ticket-form" novalidate=true on:submit=on_submit>
            <AvatarDropzone field=avatar/>
            <TextField
                id="full-name"
                label="Full Name"
                value=full_name
                error=Signal::derive(move || errors.get().full_name)
            />
            <TextField
                id="email"
                label="Email Address"
                input_type="email"
                placeholder="example@email.com"
                value=email
                error=Signal::derive(move || errors.get().email)
            />
            <TextField
                id="github-username"
                label="GitHub Username"
                placeholder="@yourusername"
                value=github_username
                error=Signal::derive(move || errors.get().github_username)
            />
            <button class="ticket-form__submit" type="submit">
                "Generate My Ticket"
            </button>
        </form>
    }
}

/// Labelled text input with an inline error line.
#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<FieldError>>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form-field__input"
                class:form-field__input--invalid=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <p class="form-field__error">
                                <InfoIcon class="form-field__error-icon"/>
                                {e.to_string()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
