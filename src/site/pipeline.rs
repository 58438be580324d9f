//! The request pipeline: triage once, then exactly one terminal action.
//!
//! START -> triage -> {create_site | ask_details | explain_concept} -> END.
//! This is a flat, acyclic dispatch - a plain function over a sum type, not
//! a workflow engine. The graph never loops back to triage and nothing here
//! retries.

use serde::Serialize;

use super::error::PipelineError;
use super::prompt::ASK_DETAILS_MESSAGE;
use super::service::SiteService;
use super::types::{Decision, FinalAction, GenerationResult, SiteClassification};
use crate::{log_debug, log_info};

/// Terminal node selected for a classified request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CreateSite,
    AskDetails,
    ExplainConcept,
}

/// Maps a classification onto the terminal node that should run.
///
/// Total over every classification: an out-of-set decision routes to
/// ask-details. When triage is ambiguous, asking the user beats guessing
/// and generating the wrong thing.
pub fn route(classification: &SiteClassification) -> Route {
    match classification.decision {
        Decision::CreateSite => Route::CreateSite,
        Decision::ExplainConcept => Route::ExplainConcept,
        Decision::AskDetails | Decision::Other => Route::AskDetails,
    }
}

/// State of a finished pipeline run.
///
/// Accumulated over the nodes that ran: the classification from triage,
/// then the output of whichever terminal node fired. `response` carries the
/// user-facing text (explanation, clarification request, or answer).
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub success: bool,
    pub final_action: FinalAction,
    pub classification: SiteClassification,
    pub html: String,
    pub css: String,
    pub js: String,
    pub react_component: String,
    pub response: String,
}

impl PipelineResult {
    fn created(
        final_action: FinalAction,
        classification: SiteClassification,
        generated: GenerationResult,
    ) -> Self {
        Self {
            success: true,
            final_action,
            classification,
            html: generated.html,
            css: generated.css,
            js: generated.js,
            react_component: generated.react_component,
            response: generated.explanation,
        }
    }

    fn text_only(
        success: bool,
        final_action: FinalAction,
        classification: SiteClassification,
        response: String,
    ) -> Self {
        Self {
            success,
            final_action,
            classification,
            html: String::new(),
            css: String::new(),
            js: String::new(),
            react_component: String::new(),
            response,
        }
    }
}

/// Runs the full pipeline for one request.
///
/// Exactly one triage call, then at most one more LLM call. Each run is
/// independent: nothing is shared with other in-flight requests and a
/// failure is fatal only to this request.
pub async fn run(service: &SiteService, request: &str) -> Result<PipelineResult, PipelineError> {
    if request.trim().is_empty() {
        return Err(PipelineError::EmptyRequest);
    }

    log_info!("Triaging request ({} chars)", request.len());
    let classification = service.classify(request).await?;
    log_debug!("Triage result: {:?}", classification);

    match route(&classification) {
        Route::CreateSite => {
            if classification.needs_react {
                log_info!("Generating React component");
                let generated = service.generate_component(request, &classification).await?;
                Ok(PipelineResult::created(
                    FinalAction::SiteCreatedReact,
                    classification,
                    generated,
                ))
            } else {
                log_info!("Generating HTML/CSS/JS site");
                let generated = service.generate_markup(request, &classification).await?;
                Ok(PipelineResult::created(
                    FinalAction::SiteCreatedHtml,
                    classification,
                    generated,
                ))
            }
        }
        Route::AskDetails => {
            log_info!("Request too vague; asking for details");
            Ok(PipelineResult::text_only(
                false,
                FinalAction::DetailsRequested,
                classification,
                ASK_DETAILS_MESSAGE.to_string(),
            ))
        }
        Route::ExplainConcept => {
            log_info!("Explaining concept");
            let explanation = service.explain_concept(request).await?;
            Ok(PipelineResult::text_only(
                true,
                FinalAction::ConceptExplained,
                classification,
                explanation,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::types::{Complexity, DesignStyle, SiteType, Technology};

    fn classification(decision: Decision) -> SiteClassification {
        SiteClassification {
            site_type: SiteType::LandingPage,
            technology: Technology::HtmlCssJs,
            complexity: Complexity::Simple,
            features: vec![],
            design_style: DesignStyle::Modern,
            decision,
            needs_react: false,
        }
    }

    #[test]
    fn test_route_is_total() {
        assert_eq!(
            route(&classification(Decision::CreateSite)),
            Route::CreateSite
        );
        assert_eq!(
            route(&classification(Decision::AskDetails)),
            Route::AskDetails
        );
        assert_eq!(
            route(&classification(Decision::ExplainConcept)),
            Route::ExplainConcept
        );
    }

    #[test]
    fn test_unrecognized_decision_routes_to_ask_details() {
        assert_eq!(route(&classification(Decision::Other)), Route::AskDetails);
    }
}
