//! Site Forge - AI-powered website generation service
//!
//! This library turns a natural-language website request into generated
//! HTML/CSS/JS or a React component: one structured triage call classifies
//! the request, then a single generation call produces the code, with
//! permissive extraction of the model's free-form reply.

pub mod config;
pub mod llm;
pub mod llm_providers;
pub mod logger;
pub mod server;
pub mod site;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use site::error::PipelineError;
pub use site::pipeline::{PipelineResult, run};
pub use site::service::SiteService;
pub use site::types::{Decision, FinalAction, GenerationResult, SiteClassification};
