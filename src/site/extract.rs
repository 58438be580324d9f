//! Response extraction for generation output.
//!
//! LLM format compliance is probabilistic, so every extraction step has a
//! strictly more permissive fallback, ending in "return the raw text". The
//! fallback order is load-bearing: reordering changes which malformed
//! replies get partially structured versus passed through raw.
//!
//! Markup mode: `[HTML]/[CSS]/[JS]/[EXPLANATION]` section markers, then a
//! doctype scan, then raw passthrough. Component mode: first-`{`-to-last-`}`
//! JSON span, then raw passthrough. These functions never fail.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::types::GenerationResult;
use crate::log_debug;

/// An extracted HTML section shorter than this is treated as missing
const MIN_HTML_LENGTH: usize = 50;

static HTML_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[HTML\](.*?)\[CSS\]").expect("valid regex"));
static CSS_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[CSS\](.*?)(?:\[JS\]|\[EXPLANATION\])").expect("valid regex"));
static JS_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[JS\](.*?)\[EXPLANATION\]").expect("valid regex"));
static EXPLANATION_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[EXPLANATION\](.*)$").expect("valid regex"));
static DOCTYPE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)<!DOCTYPE html>.*?</html>").expect("valid regex"));

/// Payload shape requested from the component generation prompt
#[derive(Debug, Default, Deserialize)]
struct ComponentPayload {
    #[serde(default)]
    react: String,
    #[serde(default)]
    css: String,
    #[serde(default)]
    explanation: String,
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Extracts the four markup sections from a raw generation reply.
///
/// Degrades progressively when the markers are missing or the HTML section
/// is implausibly short: a `<!DOCTYPE html>...</html>` span becomes the
/// HTML (CSS/JS emptied), and failing that the entire reply becomes the
/// HTML verbatim.
pub fn extract_markup(raw: &str) -> GenerationResult {
    let mut result = GenerationResult {
        html: capture(&HTML_SECTION, raw),
        css: capture(&CSS_SECTION, raw),
        js: capture(&JS_SECTION, raw),
        explanation: capture(&EXPLANATION_SECTION, raw),
        ..GenerationResult::default()
    };

    if result.html.len() < MIN_HTML_LENGTH {
        if let Some(span) = DOCTYPE_SPAN.find(raw) {
            log_debug!("Section markers missing; extracted HTML from doctype span");
            result.html = span.as_str().to_string();
            result.css.clear();
            result.js.clear();
            if result.explanation.is_empty() {
                result.explanation = "Site gerado (formato simplificado)".to_string();
            }
        } else {
            log_debug!("No markers or doctype span; using full reply as HTML");
            result.html = raw.to_string();
            result.css.clear();
            result.js.clear();
            if result.explanation.is_empty() {
                result.explanation = "Site gerado com sucesso".to_string();
            }
        }
    } else if result.explanation.is_empty() {
        result.explanation = "Site criado com sucesso!".to_string();
    }

    log_debug!(
        "Markup extraction: html={} css={} js={} chars",
        result.html.len(),
        result.css.len(),
        result.js.len()
    );
    result
}

/// Extracts the React component payload from a raw generation reply.
///
/// Parses the first-`{`-to-last-`}` span as JSON; anything unparsable makes
/// the entire reply the component source with a generic explanation.
pub fn extract_component(raw: &str) -> GenerationResult {
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}'))
        && start < end
        && let Ok(payload) = serde_json::from_str::<ComponentPayload>(&raw[start..=end])
    {
        return GenerationResult {
            react_component: payload.react,
            css: payload.css,
            explanation: if payload.explanation.is_empty() {
                "Componente React gerado".to_string()
            } else {
                payload.explanation
            },
            ..GenerationResult::default()
        };
    }

    log_debug!("No parsable JSON object in component reply; using raw text");
    GenerationResult {
        react_component: raw.to_string(),
        explanation: "Componente React gerado".to_string(),
        ..GenerationResult::default()
    }
}
