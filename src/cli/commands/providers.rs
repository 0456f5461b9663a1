//! Provider listing command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// With a provider name, shows that provider in detail; otherwise lists
/// every configured provider with its endpoint and models.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    if config.providers.is_empty() {
        println!("No providers configured.");
        println!("Add providers to ~/.config/chronolingo/config.toml");
        return Ok(());
    }

    let default_provider = config.chronolingo.provider.as_deref();

    if let Some(provider_name) = specific_provider {
        let Some(provider) = config.providers.get(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };

        let is_default = default_provider == Some(provider_name);
        println!(
            "Provider: {}{}",
            Style::value(provider_name),
            if is_default {
                Style::secondary(" (default)")
            } else {
                String::new()
            }
        );
        println!("  {} = {}", Style::label("endpoint"), provider.endpoint);
        if provider.api_key_env.is_some() || provider.api_key.is_some() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  {}  = {}",
                Style::label("api_key"),
                if has_key { "(set)" } else { "(not set)" }
            );
        }
        if provider.models.is_empty() {
            println!("  {}   = (none configured)", Style::label("models"));
        } else {
            println!("  {}:", Style::label("models"));
            for model in &provider.models {
                println!("    - {model}");
            }
        }
    } else {
        println!("{}\n", Style::header("Configured providers"));
        for (name, provider) in &config.providers {
            let is_default = default_provider == Some(name.as_str());
            println!(
                "  {}{}",
                Style::value(name),
                if is_default {
                    Style::secondary(" (default)")
                } else {
                    String::new()
                }
            );
            println!("    {}: {}", Style::label("endpoint"), provider.endpoint);
            if !provider.models.is_empty() {
                println!(
                    "    {}: {}",
                    Style::label("models"),
                    provider.models.join(", ")
                );
            }
        }
    }

    Ok(())
}
