use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of site the user is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteType {
    /// Single conversion/presentation page
    LandingPage,
    /// Personal or professional portfolio
    Portfolio,
    /// Admin/data panel
    Dashboard,
    /// Online store
    ECommerce,
    /// Blog/articles
    Blog,
    /// Institutional site
    Corporate,
    /// Anything else
    Custom,
}

impl SiteType {
    /// Wire-format name, as embedded in prompts
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LandingPage => "LANDING_PAGE",
            Self::Portfolio => "PORTFOLIO",
            Self::Dashboard => "DASHBOARD",
            Self::ECommerce => "E_COMMERCE",
            Self::Blog => "BLOG",
            Self::Corporate => "CORPORATE",
            Self::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Technology stack the generated code should target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Technology {
    HtmlCssJs,
    React,
    Both,
}

/// Rough effort class of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Complexity {
    Simple,
    Intermediate,
    Advanced,
}

/// Visual style the generation prompt steers toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DesignStyle {
    /// Clean, spaced, subtle gradients
    Modern,
    /// Whitespace and strong typography
    Minimalist,
    /// Frosted-glass effects
    Glassmorphism,
    /// Vibrant, bold gradients
    Gradient,
    /// Soft shadows and depth
    Neumorphism,
    /// Dark-mode first, neon accents
    Dark,
}

impl DesignStyle {
    /// Wire-format name, as embedded in prompts
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "MODERN",
            Self::Minimalist => "MINIMALIST",
            Self::Glassmorphism => "GLASSMORPHISM",
            Self::Gradient => "GRADIENT",
            Self::Neumorphism => "NEUMORPHISM",
            Self::Dark => "DARK",
        }
    }
}

impl fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Routing decision produced by triage.
///
/// The model is instructed to pick one of the three documented values, but
/// format compliance is probabilistic: anything else lands in `Other` at
/// deserialization time instead of failing the whole classification, and
/// the router treats it as a request for more details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    CreateSite,
    AskDetails,
    ExplainConcept,
    /// Catch-all for values outside the documented set
    #[serde(other)]
    #[schemars(skip)]
    Other,
}

/// Model for triage results: what the user wants and how to route it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SiteClassification {
    /// Kind of site requested
    pub site_type: SiteType,
    /// Target technology stack
    pub technology: Technology,
    /// Estimated complexity
    pub complexity: Complexity,
    /// Free-form feature tags ("animations", "responsive", ...)
    #[serde(default)]
    pub features: Vec<String>,
    /// Visual style to steer generation toward
    pub design_style: DesignStyle,
    /// What the pipeline should do with this request
    pub decision: Decision,
    /// Whether the React component branch should run
    #[serde(default)]
    pub needs_react: bool,
}

/// Result of one generation run.
///
/// Exactly one of {html+css+js} or {react_component+css} is populated,
/// depending on which generator branch ran; the other side stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub js: String,
    #[serde(default)]
    pub react_component: String,
    #[serde(default)]
    pub explanation: String,
}

/// Tag identifying which terminal pipeline node produced the response.
///
/// The serialized names are wire values the frontend matches on; they must
/// not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalAction {
    #[serde(rename = "SITE_CRIADO_HTML")]
    SiteCreatedHtml,
    #[serde(rename = "SITE_CRIADO_REACT")]
    SiteCreatedReact,
    #[serde(rename = "DETALHES_SOLICITADOS")]
    DetailsRequested,
    #[serde(rename = "CONCEITO_EXPLICADO")]
    ConceptExplained,
}

impl FinalAction {
    /// Wire tag for this action
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SiteCreatedHtml => "SITE_CRIADO_HTML",
            Self::SiteCreatedReact => "SITE_CRIADO_REACT",
            Self::DetailsRequested => "DETALHES_SOLICITADOS",
            Self::ConceptExplained => "CONCEITO_EXPLICADO",
        }
    }
}

impl fmt::Display for FinalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_wire_format() {
        let json = r#"{
            "site_type": "LANDING_PAGE",
            "technology": "HTML_CSS_JS",
            "complexity": "SIMPLE",
            "features": ["animations", "responsive"],
            "design_style": "MODERN",
            "decision": "CREATE_SITE",
            "needs_react": false
        }"#;
        let parsed: SiteClassification =
            serde_json::from_str(json).expect("wire format should deserialize");
        assert_eq!(parsed.site_type, SiteType::LandingPage);
        assert_eq!(parsed.decision, Decision::CreateSite);
        assert!(!parsed.needs_react);
    }

    #[test]
    fn test_unknown_decision_becomes_other() {
        let json = r#"{
            "site_type": "CUSTOM",
            "technology": "REACT",
            "complexity": "ADVANCED",
            "features": [],
            "design_style": "DARK",
            "decision": "MAKE_ME_A_SANDWICH",
            "needs_react": true
        }"#;
        let parsed: SiteClassification =
            serde_json::from_str(json).expect("unknown decision must not fail the parse");
        assert_eq!(parsed.decision, Decision::Other);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "site_type": "BLOG",
            "technology": "BOTH",
            "complexity": "INTERMEDIATE",
            "design_style": "MINIMALIST",
            "decision": "ASK_DETAILS"
        }"#;
        let parsed: SiteClassification =
            serde_json::from_str(json).expect("missing features/needs_react should default");
        assert!(parsed.features.is_empty());
        assert!(!parsed.needs_react);
    }

    #[test]
    fn test_final_action_tags() {
        assert_eq!(FinalAction::SiteCreatedHtml.as_str(), "SITE_CRIADO_HTML");
        assert_eq!(FinalAction::SiteCreatedReact.as_str(), "SITE_CRIADO_REACT");
        assert_eq!(FinalAction::DetailsRequested.as_str(), "DETALHES_SOLICITADOS");
        assert_eq!(FinalAction::ConceptExplained.as_str(), "CONCEITO_EXPLICADO");
    }
}
