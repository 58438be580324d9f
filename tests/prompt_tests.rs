use site_forge::site::prompt::{
    ASK_DETAILS_MESSAGE, WEBDEV_SYSTEM_PROMPT, create_component_user_prompt,
    create_explain_user_prompt, create_markup_user_prompt, create_triage_system_prompt,
};
use site_forge::site::types::{
    Complexity, Decision, DesignStyle, SiteClassification, SiteType, Technology,
};

fn sample_classification() -> SiteClassification {
    SiteClassification {
        site_type: SiteType::Portfolio,
        technology: Technology::HtmlCssJs,
        complexity: Complexity::Intermediate,
        features: vec!["animations".to_string(), "dark_mode".to_string()],
        design_style: DesignStyle::Glassmorphism,
        decision: Decision::CreateSite,
        needs_react: false,
    }
}

#[test]
fn test_triage_prompt_documents_the_contract() {
    let prompt = create_triage_system_prompt().expect("schema serialization should not fail");

    // The explicit structure the model is asked for
    for field in [
        "site_type",
        "technology",
        "complexity",
        "features",
        "design_style",
        "decision",
        "needs_react",
    ] {
        assert!(prompt.contains(field), "prompt should mention '{field}'");
    }
    for value in ["CREATE_SITE", "ASK_DETAILS", "EXPLAIN_CONCEPT"] {
        assert!(prompt.contains(value), "prompt should enumerate '{value}'");
    }

    // The machine-readable schema rides along
    assert!(prompt.contains("properties"));
}

#[test]
fn test_markup_prompt_embeds_classification_and_format() {
    let prompt = create_markup_user_prompt("Crie um portfolio", &sample_classification());

    assert!(prompt.contains("Crie um portfolio"));
    assert!(prompt.contains("PORTFOLIO"));
    assert!(prompt.contains("GLASSMORPHISM"));
    assert!(prompt.contains("animations, dark_mode"));
    for marker in ["[HTML]", "[CSS]", "[JS]", "[EXPLANATION]"] {
        assert!(prompt.contains(marker), "prompt should request '{marker}'");
    }
}

#[test]
fn test_component_prompt_requests_json_keys() {
    let prompt = create_component_user_prompt("Crie um card", &sample_classification());

    assert!(prompt.contains("Crie um card"));
    assert!(prompt.contains("JSON"));
    for key in ["\"react\"", "\"css\"", "\"explanation\""] {
        assert!(prompt.contains(key), "prompt should request key {key}");
    }
}

#[test]
fn test_explain_prompt_carries_the_question() {
    let prompt = create_explain_user_prompt("O que é flexbox?");
    assert!(prompt.contains("O que é flexbox?"));
}

#[test]
fn test_static_texts_are_nonempty() {
    assert!(WEBDEV_SYSTEM_PROMPT.contains("web developer"));
    assert!(ASK_DETAILS_MESSAGE.contains("Tipo de site"));
}
