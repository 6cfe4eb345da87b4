//! Diagnosis backend client
//!
//! Two same-origin endpoints:
//! - POST /analyze   multipart form, field "image" = the picked file
//! - POST /translate JSON {"text": ...}
//!
//! Both return JSON; non-200 responses carry {"error": ...}.

use plant_doctor_common::{
    parse_analysis_response, parse_error_response, parse_translation_response, AnalysisResult,
};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

const ANALYZE_URL: &str = "/analyze";
const TRANSLATE_URL: &str = "/translate";

/// Failure of one backend call, split the way the UI reports it: a
/// structured server error is rendered as-is, everything else (network
/// failure, malformed body) as an unexpected error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unexpected(String),
}

/// Translation request body
#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Unexpected(format!("{:?}", value))
}

/// Run one fetch and return (ok, body text).
async fn fetch_text(request: Request) -> Result<(bool, String), JsValue> {
    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let ok = resp.ok();
    let body = JsFuture::from(resp.text()?).await?;
    Ok((ok, body.as_string().unwrap_or_default()))
}

/// Submit the picked image for diagnosis.
///
/// # Arguments
/// * `file` - the file handle from the upload input, read by the browser
///
/// # Returns
/// * `Ok(AnalysisResult)` - parsed diagnosis
/// * `Err(ApiError::Server)` - non-200 with a structured error body
/// * `Err(ApiError::Unexpected)` - transport failure or unparseable body
pub async fn analyze(file: &File) -> Result<AnalysisResult, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob("image", file).map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(ANALYZE_URL, &opts).map_err(js_error)?;
    let (ok, body) = fetch_text(request).await.map_err(js_error)?;

    if ok {
        parse_analysis_response(&body).map_err(|e| ApiError::Unexpected(e.to_string()))
    } else {
        match parse_error_response(&body) {
            Ok(message) => Err(ApiError::Server(message)),
            Err(e) => Err(ApiError::Unexpected(e.to_string())),
        }
    }
}

/// Submit visible diagnosis text for translation to Malayalam.
pub async fn translate(text: &str) -> Result<String, ApiError> {
    let payload = serde_json::to_string(&TranslateRequest { text })
        .map_err(|e| ApiError::Unexpected(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(TRANSLATE_URL, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let (ok, body) = fetch_text(request).await.map_err(js_error)?;

    if ok {
        parse_translation_response(&body).map_err(|e| ApiError::Unexpected(e.to_string()))
    } else {
        match parse_error_response(&body) {
            Ok(message) => Err(ApiError::Server(message)),
            Err(e) => Err(ApiError::Unexpected(e.to_string())),
        }
    }
}
