//! Config priority contract tests.
//!
//! CLI options take priority over config file settings. Priority order
//! (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults

use std::collections::HashMap;

use chronolingo_cli::config::{
    AppConfig, ConfigFile, ProviderConfig, ResolveOptions, resolve_config,
};
use chronolingo_cli::translation::{Language, resolve_language};

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "test_provider".to_string(),
        ProviderConfig {
            endpoint: "http://test.local".to_string(),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
            models: vec!["test_model".to_string()],
        },
    );

    ConfigFile {
        chronolingo: AppConfig {
            provider: Some("test_provider".to_string()),
            model: Some("config_model".to_string()),
            language: Some("sumerian".to_string()),
        },
        providers,
    }
}

#[test]
fn test_cli_model_overrides_config_model() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: None,
        model: Some("cli_model".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.model, "cli_model");
}

#[test]
fn test_cli_provider_overrides_config_provider() {
    let mut config = make_config_with_defaults();
    config.providers.insert(
        "other_provider".to_string(),
        ProviderConfig {
            endpoint: "http://other.local".to_string(),
            api_key: Some("other_key".to_string()),
            api_key_env: None,
            models: vec!["other_model".to_string()],
        },
    );

    let options = ResolveOptions {
        provider: Some("other_provider".to_string()),
        model: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "other_provider");
    assert_eq!(resolved.endpoint, "http://other.local");
}

#[test]
fn test_config_defaults_used_when_cli_not_specified() {
    let config = make_config_with_defaults();
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.api_key, Some("test_key".to_string()));
}

#[test]
fn test_cli_language_overrides_config_language() {
    let config = make_config_with_defaults();

    let language =
        resolve_language(Some("greek"), config.chronolingo.language.as_deref()).unwrap();

    assert_eq!(language, Language::AncientGreek);
}

#[test]
fn test_config_language_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let language = resolve_language(None, config.chronolingo.language.as_deref()).unwrap();

    assert_eq!(language, Language::Sumerian);
}

#[test]
fn test_invalid_language_returns_error() {
    let config = make_config_with_defaults();

    let result = resolve_language(Some("latin"), config.chronolingo.language.as_deref());

    assert!(result.is_err());
}

#[test]
fn test_unknown_provider_returns_error() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: Some("nonexistent".to_string()),
        model: None,
    };

    let result = resolve_config(&options, &config);

    assert!(result.is_err());
}

#[test]
fn test_all_cli_options_override_config() {
    let mut config = make_config_with_defaults();
    config.providers.insert(
        "cli_provider".to_string(),
        ProviderConfig {
            endpoint: "http://cli.local".to_string(),
            api_key: Some("cli_key".to_string()),
            api_key_env: None,
            models: vec!["cli_model".to_string()],
        },
    );

    let options = ResolveOptions {
        provider: Some("cli_provider".to_string()),
        model: Some("cli_specified_model".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();
    let language = resolve_language(Some("hieroglyphics"), config.chronolingo.language.as_deref())
        .unwrap();

    assert_eq!(resolved.provider_name, "cli_provider");
    assert_eq!(resolved.model, "cli_specified_model");
    assert_eq!(language, Language::Hieroglyphics);
}
