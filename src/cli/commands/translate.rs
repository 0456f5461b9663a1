use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::translation::{
    CompletionClient, CompletionRequest, TRANSLATION_MAX_TOKENS, TRANSLATOR_PERSONA,
    build_translation_prompt, resolve_language,
};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let source_text = InputReader::read(options.file.as_deref())?;

    // Blank input is a notice, not an error, and must not reach the API.
    if source_text.trim().is_empty() {
        crate::notice!(
            "{}",
            Style::warning("Please enter some English text to translate.")
        );
        return Ok(());
    }

    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            provider: options.provider.clone(),
            model: options.model.clone(),
        },
        &config_file,
    )?;
    let language = resolve_language(
        options.to.as_deref(),
        config_file.chronolingo.language.as_deref(),
    )?;

    let client = CompletionClient::new(resolved.endpoint, resolved.api_key);
    let request = CompletionRequest {
        system: TRANSLATOR_PERSONA.to_string(),
        user: build_translation_prompt(language, &source_text),
        model: resolved.model,
        max_tokens: TRANSLATION_MAX_TOKENS,
    };

    let spinner = Spinner::start(format!("Translating to {}...", language.name()));
    let translation = client.complete(&request).await;
    spinner.stop();

    println!("{}", translation?);

    Ok(())
}
