//! Supported ancient languages and their prompt profiles.

use anyhow::Result;

use crate::ui::Style;

/// An ancient language the translator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Sumerian,
    AncientGreek,
    Hieroglyphics,
}

/// Static prompt data for one language.
///
/// Each profile carries everything the prompt builder interpolates: the
/// role-setting preamble, a worked example pair, the translate
/// instruction line, and a background description shown by
/// `languages --origins` and the chat `/origins` command.
#[derive(Debug)]
pub struct LanguageProfile {
    /// The language key used on the command line (e.g. "sumerian").
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Role-setting preamble naming the linguistic domain.
    pub preamble: &'static str,
    /// English side of the worked example pair.
    pub example_source: &'static str,
    /// Translated side of the worked example pair.
    pub example_target: &'static str,
    /// Instruction line placed before the literal source text.
    pub instruction: &'static str,
    /// Language-origins background, shown on request.
    pub origins: &'static str,
}

const SUMERIAN: LanguageProfile = LanguageProfile {
    key: "sumerian",
    name: "Sumerian",
    preamble: "You are an expert in Sumerian grammar and translation. Use authentic \
               transliteration, SOV word order, and agglutinative structure. Do not explain \
               anything. Only return the translation.",
    example_source: "I am Aarav",
    example_target: "Aarav-e me-en",
    instruction: "Translate this to Ancient Sumerian:",
    origins: "Sumerian is the very first language that originated in Ancient Mesopotamia over \
              5000 years ago. It was used and spoken in Southern Mesopotamia beginning around \
              3100 BCE. As a spoken language, it eventually stopped being used around 2000 BCE, \
              but it continued to be used for writing up until the first century AD. Sumerian is \
              considered an agglutinative language, meaning that words are built by attaching a \
              series of prefixes and suffixes to a root. Sumerian uses the SOV format for word \
              and sentence order, which means that the subject comes first, followed by the \
              object, and then the verb. The language played a key role in early Mesopotamian \
              culture; it was used for everything from keeping administrative records to legal \
              documents and even religious texts and literature. One of the most famous works in \
              Ancient History, the Epic of Gilgamesh, was first drafted in Sumerian as \
              literature.",
};

const ANCIENT_GREEK: LanguageProfile = LanguageProfile {
    key: "greek",
    name: "Ancient Greek",
    preamble: "You are an expert in Ancient Greek grammar. Use Attic Greek with correct verb \
               conjugation, noun cases, and diacritics. Only return the Ancient Greek \
               translation. Do not explain anything.",
    example_source: "I am Aarav",
    example_target: "Εῐμὶ Ἀἀραβ",
    instruction: "Translate this to Ancient Greek:",
    origins: "Ancient Greek was spoken from around the 9th century BCE to the 6th century CE. \
              It featured a complex system of noun cases, verb conjugations, and moods, \
              including the optative and aorist. It is the language of Homer, Aristotle, and \
              the New Testament. It differs significantly from Modern Greek.",
};

const HIEROGLYPHICS: LanguageProfile = LanguageProfile {
    key: "hieroglyphics",
    name: "Hieroglyphics",
    preamble: "You are an expert in Egyptian hieroglyphs. Return only Unicode hieroglyphs (from \
               block U+13000 to U+1342F), no transliterations or explanations.",
    example_source: "I am Aarav",
    example_target: "[𓃋𓷵𒠿 𒠿𒡝𒠿𒡯]",
    instruction: "Translate this to Egyptian Hieroglyphs:",
    origins: "Hieroglyphics is a system of complex illustrations created by the Ancient \
              Egyptians over 5000 years ago. They consisted of several illustrations such as \
              waves, human figures, and birds combined to form a complete sentence/thought. \
              They originated during the Pre-dynastic era around 3200 BCE and were used all the \
              way up until the end of Roman Occupation in Egypt in the 3rd century AD. \
              Hieroglyphs were typically carved in Egyptian temple complexes and in funerary \
              complexes as well. The most notable of these carvings are the ones carved at the \
              Karnak Temple Complex in Luxor. Later, Hieroglyphs developed into a verbally \
              written system of cursive script called Hieratic. This was used only in the \
              government as a way of managing taxes, planned buildings, and workloads.",
};

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Self; 3] = [Self::Sumerian, Self::AncientGreek, Self::Hieroglyphics];

    /// The prompt profile for this language.
    pub const fn profile(self) -> &'static LanguageProfile {
        match self {
            Self::Sumerian => &SUMERIAN,
            Self::AncientGreek => &ANCIENT_GREEK,
            Self::Hieroglyphics => &HIEROGLYPHICS,
        }
    }

    pub const fn key(self) -> &'static str {
        self.profile().key
    }

    pub const fn name(self) -> &'static str {
        self.profile().name
    }

    /// Resolves a language key to a `Language`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the supported keys if the key is not
    /// recognized. There is no silent fallthrough for unknown values.
    pub fn from_key(key: &str) -> Result<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "sumerian" => Ok(Self::Sumerian),
            "greek" | "ancient-greek" => Ok(Self::AncientGreek),
            "hieroglyphics" | "hieroglyphs" => Ok(Self::Hieroglyphics),
            _ => anyhow::bail!(
                "Unknown language: '{key}'\n\n\
                 Supported languages: sumerian, greek, hieroglyphics\n\
                 Run 'chronolingo languages' to see details."
            ),
        }
    }
}

/// Resolves the target language from the CLI flag or the configured
/// default, whichever is present (CLI wins).
pub fn resolve_language(cli: Option<&str>, configured: Option<&str>) -> Result<Language> {
    let key = cli.or(configured).ok_or_else(|| {
        anyhow::anyhow!(
            "Missing required configuration: 'to' (target language)\n\n\
             Please provide it via:\n  \
             - CLI option: chronolingo --to <language>\n  \
             - Config file: Run 'chronolingo configure' to set up configuration"
        )
    })?;
    Language::from_key(key)
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported ancient languages"));
    for language in Language::ALL {
        println!(
            "  {:15} {}",
            Style::code(language.key()),
            Style::secondary(language.name())
        );
    }
}

/// Prints the full language-origins descriptions to stdout.
pub fn print_origins() {
    for language in Language::ALL {
        println!("{}", Style::header(language.name()));
        println!("{}", language.profile().origins);
        println!();
    }
}
