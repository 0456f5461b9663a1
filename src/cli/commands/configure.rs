//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{AppConfig, ConfigFile, ConfigManager};
use crate::translation::Language;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Interactively sets the default provider, model, and target language.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    if config.providers.is_empty() {
        bail!(
            "No providers configured.\n\n\
             Add a [providers.<name>] table to ~/.config/chronolingo/config.toml first."
        );
    }

    print_current_defaults(&config);

    let provider_names: Vec<String> = config.providers.keys().cloned().collect();

    let default_provider = config.chronolingo.provider.clone();
    let provider = select_provider(&provider_names, default_provider.as_deref())?;

    let available_models: Vec<String> = config
        .providers
        .get(&provider)
        .map(|p| p.models.clone())
        .unwrap_or_default();

    let default_model = config.chronolingo.model.clone();
    let model = select_model(&available_models, default_model.as_deref())?;

    let default_language = config.chronolingo.language.clone();
    let language = select_language(default_language.as_deref())?;

    config.chronolingo = AppConfig {
        provider: Some(provider),
        model: Some(model),
        language: Some(language),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        config
            .chronolingo
            .provider
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        config
            .chronolingo
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        config
            .chronolingo
            .language
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        // No models configured, fall back to text input
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}

fn select_language(default: Option<&str>) -> Result<String> {
    // Options shown as "key - Name"
    let options: Vec<String> = Language::ALL
        .iter()
        .map(|language| format!("{} - {}", language.key(), language.name()))
        .collect();

    let default_index = default
        .and_then(|d| Language::ALL.iter().position(|language| language.key() == d))
        .unwrap_or(0);

    let selection = Select::new("Default target language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let key = selection.split(" - ").next().unwrap_or(&selection);

    Ok(key.to_string())
}
