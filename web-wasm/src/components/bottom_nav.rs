//! Bottom navigation component
//!
//! Rendered only while a diagnosed result is on screen: jump links to the
//! Problem and Solution sections plus the translate action. Translation is
//! one-shot per analysis, so the whole bar disappears once it succeeds.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::app::Screen;

#[component]
pub fn BottomNav<F>(screen: ReadSignal<Screen>, on_translate: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div id="bottom-nav" class="bottom-nav">
            <button
                id="problem-nav-button"
                class="btn btn-secondary"
                on:click=move |_| scroll_to_section("problem-section")
            >
                "Problem"
            </button>

            <button
                id="solution-nav-button"
                class="btn btn-secondary"
                on:click=move |_| scroll_to_section("solution-section")
            >
                "Solution"
            </button>

            <button
                id="translate-nav-button"
                class="btn btn-primary"
                disabled=move || screen.get().is_translating()
                on:click={
                    let on_translate = on_translate.clone();
                    move |_| on_translate(())
                }
            >
                "Translate to Malayalam"
            </button>
        </div>
    }
}

/// Smooth-scroll a rendered section into view. No-op if the section is not
/// in the DOM.
fn scroll_to_section(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(section) = document.get_element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
