//! Plain-text flattening of rendered sections
//!
//! The translation endpoint receives the text a user actually sees, not the
//! structured fields: the Problem and Solution sections flattened to plain
//! text and joined with a newline. These functions are the single
//! definition of that visible text, shared by the UI and the tests.

use crate::types::AnalysisResult;

/// Tags that break the line when flattening, mirroring how the browser
/// lays the fragment out.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "br",
];

/// Flatten an HTML fragment to plain text.
///
/// Block-level tags and `<br>` become newlines, inline tags vanish, common
/// entities are decoded, and blank lines are dropped.
///
/// # Examples
/// ```
/// use plant_doctor_common::strip_markup;
///
/// let html = "<h3>Treatment Steps</h3><ul><li>Prune</li><li>Spray</li></ul>";
/// assert_eq!(strip_markup(html), "Treatment Steps\nPrune\nSpray");
/// ```
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(idx) = rest.find('<') {
        text.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match rest.find('>') {
            Some(end) => {
                if is_block_tag(&rest[1..end]) {
                    text.push('\n');
                }
                rest = &rest[end + 1..];
            }
            None => {
                // unterminated tag: drop the remainder
                rest = "";
            }
        }
    }
    text.push_str(rest);

    decode_entities(&text)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_block_tag(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    BLOCK_TAGS.contains(&name.as_str())
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        // entities are short; anything longer is a literal ampersand
        let replacement = rest.find(';').filter(|&end| end <= 7).and_then(|end| {
            let decoded = match &rest[..=end] {
                "&amp;" => "&",
                "&lt;" => "<",
                "&gt;" => ">",
                "&quot;" => "\"",
                "&#39;" | "&apos;" => "'",
                "&nbsp;" => " ",
                _ => return None,
            };
            Some((decoded, end))
        });

        match replacement {
            Some((decoded, end)) => {
                out.push_str(decoded);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Visible text of the Problem section for a diagnosed plant.
///
/// Matches the rendered layout: heading, disease line, confidence line,
/// then the flattened description.
pub fn problem_text(result: &AnalysisResult) -> String {
    let mut lines = vec![
        "Problem".to_string(),
        format!("Disease: {}", result.disease_name),
        format!("Confidence: {}", result.confidence_percent()),
    ];
    let description = strip_markup(&result.description);
    if !description.is_empty() {
        lines.push(description);
    }
    lines.join("\n")
}

/// Visible text of the Solution section.
pub fn solution_text(result: &AnalysisResult) -> String {
    let treatment = strip_markup(&result.treatment_recommendation);
    if treatment.is_empty() {
        "Solution".to_string()
    } else {
        format!("Solution\n{}", treatment)
    }
}

/// The exact text submitted to the translation endpoint: Problem section,
/// a newline, Solution section.
pub fn translation_input(result: &AnalysisResult) -> String {
    format!("{}\n{}", problem_text(result), solution_text(result))
}
