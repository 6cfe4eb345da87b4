//! Main application component
//!
//! The whole UI renders from a single [`Screen`] value; handlers compute
//! the next screen and set it. Concurrent submissions are fenced with a
//! token so only the most recently initiated request may commit.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::api::{self, ApiError};
use crate::components::{
    bottom_nav::BottomNav, header::Header, loader::Loader, results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use plant_doctor_common::{translation_input, AnalysisResult};

/// Screen state. Rendering is a pure function of this value; no result or
/// visibility lives anywhere else.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Screen {
    #[default]
    Idle,
    Analyzing,
    /// Analysis failed; the message is rendered inline and no result is
    /// held (Idle-equivalent).
    Failed(String),
    Results(AnalysisResult),
    /// Translation in flight; the diagnosis stays on screen under the
    /// loader and is restored verbatim if translation fails.
    Translating(AnalysisResult),
    Translated(String),
}

impl Screen {
    /// Navigation is available only while a diagnosed (non-healthy)
    /// result is on screen.
    pub fn shows_nav(&self) -> bool {
        match self {
            Screen::Results(result) | Screen::Translating(result) => !result.is_healthy(),
            _ => false,
        }
    }

    pub fn is_translating(&self) -> bool {
        matches!(self, Screen::Translating(_))
    }
}

/// Inline message for a failed analysis.
fn analysis_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Server(message) => format!("Error: {}", message),
        ApiError::Unexpected(message) => {
            format!("An unexpected error occurred: {}", message)
        }
    }
}

/// Alert text for a failed translation.
fn translation_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Server(message) => format!("Translation Error: {}", message),
        ApiError::Unexpected(message) => {
            format!("An unexpected error occurred during translation: {}", message)
        }
    }
}

/// The picked file, read off the upload input at click time. The browser
/// input owns the file handle; nothing else retains it.
fn selected_file() -> Option<web_sys::File> {
    let document = web_sys::window().unwrap().document().unwrap();
    let input: HtmlInputElement = document.get_element_by_id("image-upload")?.dyn_into().ok()?;
    input.files()?.get(0)
}

fn alert(message: &str) {
    let _ = web_sys::window().unwrap().alert_with_message(message);
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Idle);
    let (preview, set_preview) = signal(None::<String>);
    // Request fence: bumped per user-initiated request; completions
    // carrying a stale token are discarded.
    let (fence, set_fence) = signal(0u64);

    let on_analyze = move |_| {
        let Some(file) = selected_file() else {
            alert("Please upload an image first.");
            return;
        };

        let token = fence.get_untracked() + 1;
        set_fence.set(token);
        set_screen.set(Screen::Analyzing);

        let started = js_sys::Date::now();
        spawn_local(async move {
            let outcome = api::analyze(&file).await;
            if fence.get_untracked() != token {
                gloo::console::log!("analyze: stale response discarded");
                return;
            }
            gloo::console::log!(format!(
                "analyze: finished in {:.0}ms",
                js_sys::Date::now() - started
            ));
            match outcome {
                Ok(result) => set_screen.set(Screen::Results(result)),
                Err(error) => {
                    gloo::console::error!(format!("analyze: {}", error));
                    set_screen.set(Screen::Failed(analysis_failure_message(&error)));
                }
            }
        });
    };

    let on_translate = move |_| {
        let Screen::Results(result) = screen.get_untracked() else {
            return;
        };
        if result.is_healthy() {
            return;
        }

        let token = fence.get_untracked() + 1;
        set_fence.set(token);

        let text = translation_input(&result);
        set_screen.set(Screen::Translating(result.clone()));

        spawn_local(async move {
            let outcome = api::translate(&text).await;
            if fence.get_untracked() != token {
                gloo::console::log!("translate: stale response discarded");
                return;
            }
            match outcome {
                Ok(translation) => set_screen.set(Screen::Translated(translation)),
                Err(error) => {
                    gloo::console::error!(format!("translate: {}", error));
                    alert(&translation_failure_message(&error));
                    // back to the pre-translate view, nav included
                    set_screen.set(Screen::Results(result));
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea preview=preview set_preview=set_preview />

            <button id="analyze-button" class="btn btn-primary" on:click=on_analyze>
                "Analyze"
            </button>

            <ResultsPanel screen=screen />

            <Show when=move || screen.get().is_translating()>
                <Loader />
            </Show>

            <Show when=move || screen.get().shows_nav()>
                <BottomNav screen=screen on_translate=on_translate.clone() />
            </Show>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    /// With no upload input in the document there is no file to read; this
    /// is the guard that alerts instead of issuing a request.
    #[wasm_bindgen_test]
    fn test_selected_file_without_input() {
        assert!(selected_file().is_none());
    }
}
