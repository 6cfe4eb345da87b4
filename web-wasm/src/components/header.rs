//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Plant Doctor"</h1>
            <p class="tagline">"AI plant disease diagnosis"</p>
        </header>
    }
}
