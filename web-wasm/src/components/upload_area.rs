//! Upload area component
//!
//! Native file picker plus an inline preview. Picking a file only renders
//! the preview; no network call happens until the user hits Analyze, and
//! the file handle itself stays owned by the input element.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn UploadArea(
    preview: ReadSignal<Option<String>>,
    set_preview: WriteSignal<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        // dialog dismissed without a pick: keep the current preview
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        read_preview(file, set_preview);
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                id="image-upload"
                accept="image/*"
                on:change=on_change
            />
            <div id="image-preview" class="image-preview">
                {move || {
                    preview
                        .get()
                        .map(|data_url| view! { <img src=data_url alt="Image preview" /> })
                }}
            </div>
        </div>
    }
}

/// Read the file as a data URL and publish it as the preview.
fn read_preview(file: File, set_preview: WriteSignal<Option<String>>) {
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_preview.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
