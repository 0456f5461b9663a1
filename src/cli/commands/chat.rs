use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::translation::resolve_language;

pub struct ChatOptions {
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(&options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

fn load_session_config(options: &ChatOptions) -> Result<SessionConfig> {
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

    Ok(SessionConfig::new(
        resolved.provider_name,
        resolved.endpoint,
        resolved.model,
        resolved.api_key,
        language,
    ))
}
