//! Plant Doctor common library
//!
//! Types and utilities shared between the web UI and its tests:
//! - wire types for the analyze/translate endpoints
//! - response parsing
//! - HTML-to-plain-text flattening for translation input

pub mod error;
pub mod parser;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use parser::{parse_analysis_response, parse_error_response, parse_translation_response};
pub use text::{problem_text, solution_text, strip_markup, translation_input};
pub use types::{AnalysisResult, ErrorBody, TranslationResult, HEALTHY};
