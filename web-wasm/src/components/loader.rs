//! Loading indicator component

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div id="loader" class="loader">
            <div class="spinner"></div>
            <p>"Translating..."</p>
        </div>
    }
}
