use anyhow::Result;
use std::path::Path;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::document::{self, MediaType};
use crate::input::InputReader;
use crate::translation::{ANALYSIS_MAX_TOKENS, ANALYST_PERSONA, CompletionClient, CompletionRequest};
use crate::ui::{Spinner, Style};

pub struct AnalyzeOptions {
    pub file: String,
    pub format: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

pub async fn run_analyze(options: AnalyzeOptions) -> Result<()> {
    // A declared format wins over the extension.
    let media_type = match options.format.as_deref() {
        Some(declared) => MediaType::from_declared(declared)?,
        None => MediaType::from_path(Path::new(&options.file))?,
    };

    let bytes = InputReader::read_bytes(&options.file)?;
    let text = document::extract_text(&bytes, media_type)?;

    if text.trim().is_empty() {
        crate::notice!(
            "{}",
            Style::warning("The document contains no extractable text.")
        );
        return Ok(());
    }

    crate::status!("{}", Style::header("File Content Preview"));
    crate::status!("{}", document::preview(&text));
    crate::status!("");

    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            provider: options.provider.clone(),
            model: options.model.clone(),
        },
        &config_file,
    )?;

    let client = CompletionClient::new(resolved.endpoint, resolved.api_key);
    let request = CompletionRequest {
        system: ANALYST_PERSONA.to_string(),
        user: document::submission(&text).to_string(),
        model: resolved.model,
        max_tokens: ANALYSIS_MAX_TOKENS,
    };

    let spinner = Spinner::start("Analyzing historical context...");
    let analysis = client.complete(&request).await;
    spinner.stop();
    let analysis = analysis?;

    crate::status!("{}", Style::header("Historical Analysis"));
    println!("{analysis}");

    Ok(())
}
