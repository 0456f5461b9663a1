use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::translation::{
    CompletionClient, CompletionRequest, Language, TRANSLATION_MAX_TOKENS, TRANSLATOR_PERSONA,
    build_translation_prompt,
};
use crate::ui::{Spinner, Style};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// The target ancient language.
    pub language: Language,
}

impl SessionConfig {
    /// Creates a new session configuration.
    pub const fn new(
        provider_name: String,
        endpoint: String,
        model: String,
        api_key: Option<String>,
        language: Language,
    ) -> Self {
        Self {
            provider_name,
            endpoint,
            model,
            api_key,
            language,
        }
    }
}

/// An interactive translation session.
///
/// REPL-style interface: plain text is translated to the session's
/// target language; slash commands inspect or adjust the session.
pub struct ChatSession {
    config: SessionConfig,
    client: CompletionClient,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = CompletionClient::new(config.endpoint.clone(), config.api_key.clone());
        Self { config, client }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type English text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await?;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Language(key) => {
                self.set_language(key.as_deref());
                true
            }
            SlashCommand::Origins => {
                ui::print_origins(self.config.language);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn set_language(&mut self, key: Option<&str>) {
        let Some(key) = key else {
            println!("Usage: /language <key>");
            println!("Keys: sumerian, greek, hieroglyphics");
            return;
        };

        match Language::from_key(key) {
            Ok(language) => {
                self.config.language = language;
                println!(
                    "{} Target language set to {}\n",
                    Style::success("✓"),
                    Style::value(language.name())
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn translate_and_print(&self, text: &str) -> Result<()> {
        let request = CompletionRequest {
            system: TRANSLATOR_PERSONA.to_string(),
            user: build_translation_prompt(self.config.language, text),
            model: self.config.model.clone(),
            max_tokens: TRANSLATION_MAX_TOKENS,
        };

        let spinner = Spinner::start(format!("Translating to {}...", self.config.language.name()));
        let translation = self.client.complete(&request).await;
        spinner.stop();

        // One failed request should not end the session.
        match translation {
            Ok(translation) => {
                println!("{translation}");
                println!();
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }

        Ok(())
    }
}
