//! Shared test infrastructure: stub LLM providers with canned replies.

// Included via #[path] by several test crates; not every crate uses every
// helper, and the file also compiles standalone as its own test target.
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use site_forge::llm_providers::LLMProvider;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An `LLMProvider` that returns a canned reply (or a canned failure) and
/// counts how many times it was called.
pub struct StubProvider {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMProvider for StubProvider {
    async fn generate_message(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(anyhow!("stub provider failure")),
        }
    }
}

/// A triage reply in the classification wire format
pub fn classification_json(decision: &str, needs_react: bool) -> String {
    format!(
        r#"{{"site_type": "LANDING_PAGE", "technology": "HTML_CSS_JS", "complexity": "SIMPLE", "features": ["responsive"], "design_style": "MODERN", "decision": "{decision}", "needs_react": {needs_react}}}"#
    )
}

/// A well-formed markup generation reply with all four section markers
pub fn markup_reply() -> String {
    "[HTML]\n<!DOCTYPE html>\n<html><head><title>Landing</title></head>\
     <body><h1>Welcome</h1><p>A contact form lives here.</p></body></html>\n\
     [CSS]\nbody { margin: 0; font-family: sans-serif; }\n\
     [JS]\ndocument.querySelector('h1');\n\
     [EXPLANATION]\nLanding page with a contact form."
        .to_string()
}

/// A well-formed component generation reply (single JSON object)
pub fn component_reply() -> String {
    r#"{"react": "export default function Card() { return <div/>; }", "css": ".card { padding: 24px; }", "explanation": "Drop <Card/> into your app."}"#
        .to_string()
}
