mod client;
mod language;
mod prompt;

pub use client::{
    ANALYSIS_MAX_TOKENS, CompletionClient, CompletionRequest, TRANSLATION_MAX_TOKENS,
};
pub use language::{Language, LanguageProfile, print_languages, print_origins, resolve_language};
pub use prompt::{ANALYST_PERSONA, TRANSLATOR_PERSONA, build_translation_prompt};
