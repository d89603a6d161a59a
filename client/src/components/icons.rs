//! Inline SVG icons.

use leptos::prelude::*;

#[component]
pub fn LogoMark(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 40 40" fill="none" aria-hidden="true">
            <rect x="2" y="2" width="36" height="36" rx="8" stroke="currentColor" stroke-width="3"/>
            <path d="M15 13 8 20l7 7M25 13l7 7-7 7" stroke="#f57463" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    }
}

#[component]
pub fn UploadIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path d="M12 16V4m0 0-4 4m4-4 4 4" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            <path d="M4 16v2a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-2" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
        </svg>
    }
}

#[component]
pub fn InfoIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 16 16" fill="none" aria-hidden="true">
            <circle cx="8" cy="8" r="6.5" stroke="currentColor"/>
            <path d="M8 7.5v4M8 5h.01" stroke="currentColor" stroke-linecap="round"/>
        </svg>
    }
}

#[component]
pub fn GithubIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M12 2a10 10 0 0 0-3.16 19.49c.5.09.68-.22.68-.48v-1.7c-2.78.6-3.37-1.34-3.37-1.34-.45-1.16-1.11-1.47-1.11-1.47-.91-.62.07-.61.07-.61 1 .07 1.53 1.03 1.53 1.03.9 1.52 2.34 1.08 2.91.83.09-.65.35-1.09.63-1.34-2.22-.25-4.55-1.11-4.55-4.94 0-1.09.39-1.98 1.03-2.68-.1-.25-.45-1.27.1-2.64 0 0 .84-.27 2.75 1.02A9.56 9.56 0 0 1 12 6.84c.85 0 1.7.11 2.5.34 1.91-1.29 2.75-1.02 2.75-1.02.55 1.37.2 2.39.1 2.64.64.7 1.03 1.59 1.03 2.68 0 3.84-2.34 4.68-4.57 4.93.36.31.68.92.68 1.85v2.75c0 .27.18.58.69.48A10 10 0 0 0 12 2Z"/>
        </svg>
    }
}
