//! Pipeline error taxonomy.
//!
//! Only call failures are errors. Malformed generation output is handled by
//! the extractor's fallbacks and never surfaces here.

use thiserror::Error;

/// Errors that abort a single request's pipeline run.
///
/// None of these are retried, and none corrupt any state beyond the request
/// they belong to; every request starts fresh.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request text was missing or blank; no LLM call was attempted
    #[error("empty request")]
    EmptyRequest,

    /// The triage call failed or returned output that does not fit the
    /// classification schema
    #[error("triage failed: {0}")]
    Classification(anyhow::Error),

    /// The generation call itself failed (network/auth/quota)
    #[error("generation failed: {0}")]
    Generation(anyhow::Error),
}
