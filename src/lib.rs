//! # chronolingo - Ancient Language Translation CLI
//!
//! `chronolingo` translates English text into Sumerian, Ancient Greek,
//! or Egyptian Hieroglyphics using OpenAI-compatible API endpoints, and
//! analyzes uploaded documents (.pdf, .txt, .csv) for historical
//! context.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file to Sumerian
//! chronolingo --to sumerian ./inscription.txt
//!
//! # Translate from stdin
//! echo "I am Aarav" | chronolingo --to greek
//!
//! # Analyze a document for historical context
//! chronolingo analyze ./tablet-scan.pdf
//!
//! # Interactive chat mode
//! chronolingo chat --to hieroglyphics
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/chronolingo/config.toml`:
//!
//! ```toml
//! [chronolingo]
//! provider = "openai"
//! model = "gpt-4"
//! language = "sumerian"
//!
//! [providers.openai]
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//! models = ["gpt-4"]
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Plain-text extraction from uploaded documents.
pub mod document;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Prompt building and the completion client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
