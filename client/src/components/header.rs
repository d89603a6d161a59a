//! Site header with the conference logo linking home.

use leptos::prelude::*;

use crate::components::icons::LogoMark;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__home" href="/" aria-label="Coding Conf home">
                <LogoMark class="site-header__mark"/>
                <span class="site-header__name">"Coding Conf"</span>
            </a>
        </header>
    }
}
