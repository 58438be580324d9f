use anyhow::Result;
use site_forge::config::Config;
use std::collections::HashMap;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.default_provider, "gemini");
    assert!(config.providers.contains_key("gemini"));
    assert!(config.providers.contains_key("openai"));
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
}

#[test]
fn test_config_from_toml() -> Result<()> {
    let toml_str = r#"
        default_provider = "openai"

        [server]
        host = "0.0.0.0"
        port = 8080

        [providers.openai]
        api_key = "test-key"
        model = "gpt-4.1-mini"

        [providers.openai.additional_params]
        temperature = "0.5"
    "#;

    let config: Config = toml::from_str(toml_str)?;
    assert_eq!(config.default_provider, "openai");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);

    let provider = config
        .get_provider_config("openai")
        .expect("openai provider should exist");
    assert_eq!(provider.api_key, "test-key");
    assert_eq!(provider.model, "gpt-4.1-mini");
    assert_eq!(
        provider.additional_params.get("temperature").map(String::as_str),
        Some("0.5")
    );
    Ok(())
}

#[test]
fn test_server_section_is_optional() -> Result<()> {
    let config: Config = toml::from_str(
        r#"
        default_provider = "gemini"

        [providers.gemini]
        api_key = "k"
    "#,
    )?;
    assert_eq!(config.server.port, 5000);
    Ok(())
}

#[test]
fn test_google_alias_resolves_to_gemini() {
    let config = Config::default();
    assert!(config.get_provider_config("google").is_some());
    assert!(config.get_provider_config("Google").is_some());
    assert!(config.get_provider_config("nonexistent").is_none());
}

#[test]
fn test_update_config() -> Result<()> {
    let mut config = Config::default();
    config.update(
        Some("openai".to_string()),
        Some("new-key".to_string()),
        Some("gpt-4.1".to_string()),
        Some(HashMap::from([(
            "temperature".to_string(),
            "0.2".to_string(),
        )])),
    )?;

    assert_eq!(config.default_provider, "openai");
    let provider = config
        .get_provider_config("openai")
        .expect("openai provider should exist");
    assert_eq!(provider.api_key, "new-key");
    assert_eq!(provider.model, "gpt-4.1");
    Ok(())
}

#[test]
fn test_check_environment_requires_api_key() {
    let mut config = Config::default();
    // Guard against a key leaking in from the test environment
    if let Some(provider) = config.providers.get_mut("gemini") {
        provider.api_key.clear();
    }
    assert!(config.check_environment().is_err());

    if let Some(provider) = config.providers.get_mut("gemini") {
        provider.api_key = "some-key".to_string();
    }
    assert!(config.check_environment().is_ok());
}

#[test]
fn test_unknown_default_provider_fails_check() {
    let config = Config {
        default_provider: "netscape".to_string(),
        ..Config::default()
    };
    assert!(config.check_environment().is_err());
}
