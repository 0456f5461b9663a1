//! Prompt assembly for translation and analysis requests.

use super::language::Language;

/// System instruction for translation requests.
pub const TRANSLATOR_PERSONA: &str =
    "You are a linguistic expert specializing in ancient languages including Sumerian, \
     Ancient Greek, and Egyptian Hieroglyphs.";

/// System instruction for historical-analysis requests.
pub const ANALYST_PERSONA: &str =
    "You are a historian and linguist expert in ancient texts (Greek, Sumerian, Akkadian). \
     Provide contextual analysis, dating, cultural insight, and possible origin.";

/// Builds the user message for a translation request: the language's
/// preamble, its worked example pair, the instruction line, and the
/// source text embedded verbatim. No escaping is applied.
pub fn build_translation_prompt(language: Language, source_text: &str) -> String {
    let profile = language.profile();
    format!(
        "{preamble}\n\n\
         Example:\n\
         \"{example_source}\" → {example_target}\n\n\
         {instruction}\n\
         \"{source_text}\"",
        preamble = profile.preamble,
        example_source = profile.example_source,
        example_target = profile.example_target,
        instruction = profile.instruction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sumerian_prompt_contains_example_and_input() {
        let prompt = build_translation_prompt(Language::Sumerian, "Hello");
        assert!(prompt.contains("Aarav-e me-en"));
        assert!(prompt.contains("expert in Sumerian grammar"));
        assert!(prompt.contains("\"Hello\""));
    }

    #[test]
    fn test_greek_prompt_contains_example_and_input() {
        let prompt = build_translation_prompt(Language::AncientGreek, "The ships sailed at dawn");
        assert!(prompt.contains("Εῐμὶ Ἀἀραβ"));
        assert!(prompt.contains("Attic Greek"));
        assert!(prompt.contains("\"The ships sailed at dawn\""));
    }

    #[test]
    fn test_hieroglyphics_prompt_contains_example_and_input() {
        let prompt = build_translation_prompt(Language::Hieroglyphics, "Hello");
        assert!(prompt.contains("Egyptian hieroglyphs"));
        assert!(prompt.contains("U+13000"));
        assert!(prompt.contains("\"Hello\""));
    }

    #[test]
    fn test_prompt_embeds_input_verbatim() {
        let tricky = "line one\n\"quoted\" → arrows & symbols";
        let prompt = build_translation_prompt(Language::Sumerian, tricky);
        assert!(prompt.contains(tricky));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_translation_prompt(Language::AncientGreek, "Hello");
        let b = build_translation_prompt(Language::AncientGreek, "Hello");
        assert_eq!(a, b);
    }

    #[test]
    fn test_personas_name_their_domains() {
        assert!(TRANSLATOR_PERSONA.contains("ancient languages"));
        assert!(ANALYST_PERSONA.contains("historian"));
    }
}
