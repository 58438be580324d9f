//! Website generation domain: triage, prompts, generation, extraction, routing.

pub mod error;
pub mod extract;
pub mod pipeline;
pub mod prompt;
pub mod service;
pub mod types;

pub use error::PipelineError;
pub use pipeline::{PipelineResult, Route, route, run};
pub use service::SiteService;
pub use types::{Decision, FinalAction, GenerationResult, SiteClassification};
