//! Results panel component
//!
//! Pure render of the current [`Screen`]. The description and treatment
//! fields arrive as HTML fragments from the backend and are injected via
//! `inner_html`, matching how the diagnosis is authored.

use leptos::prelude::*;

use crate::app::Screen;
use plant_doctor_common::AnalysisResult;

#[component]
pub fn ResultsPanel(screen: ReadSignal<Screen>) -> impl IntoView {
    view! {
        <div id="results-output" class="results-output">
            {move || match screen.get() {
                Screen::Idle => {
                    view! {
                        <p class="text-muted">"Upload a photo of your plant to begin."</p>
                    }
                        .into_any()
                }
                Screen::Analyzing => view! { <p>"Analyzing..."</p> }.into_any(),
                Screen::Failed(message) => {
                    view! { <p class="error">{message}</p> }.into_any()
                }
                Screen::Results(result) | Screen::Translating(result) => {
                    diagnosis_view(result).into_any()
                }
                Screen::Translated(text) => translated_view(text).into_any(),
            }}
        </div>
    }
}

fn diagnosis_view(result: AnalysisResult) -> impl IntoView {
    if result.is_healthy() {
        return view! {
            <p>"The plant appears to be "<strong>"Healthy"</strong>"."</p>
        }
        .into_any();
    }

    view! {
        <div id="problem-section" class="result-section">
            <h2>"Problem"</h2>
            <p><strong>"Disease:"</strong>" "{result.disease_name.clone()}</p>
            <p><strong>"Confidence:"</strong>" "{result.confidence_percent()}</p>
            <div inner_html=result.description.clone()></div>
        </div>
        <div id="solution-section" class="result-section">
            <h2>"Solution"</h2>
            <div inner_html=result.treatment_recommendation.clone()></div>
        </div>
    }
    .into_any()
}

/// Translation text with embedded newlines rendered as line breaks.
fn translated_view(text: String) -> impl IntoView {
    view! {
        <p class="translation">
            {text
                .lines()
                .map(|line| view! { <span>{line.to_string()}</span><br /> })
                .collect_view()}
        </p>
    }
}
