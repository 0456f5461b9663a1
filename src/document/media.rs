//! Upload format detection for the analyzer.

use anyhow::Result;
use std::path::Path;

/// Declared upload formats accepted by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    PlainText,
    Csv,
}

impl MediaType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "txt",
            Self::Csv => "csv",
        }
    }

    /// Resolves a declared format value. Accepts the short keys used on
    /// the command line and the corresponding MIME types.
    pub fn from_declared(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pdf" | "application/pdf" => Ok(Self::Pdf),
            "txt" | "text" | "text/plain" => Ok(Self::PlainText),
            "csv" | "text/csv" => Ok(Self::Csv),
            _ => anyhow::bail!(
                "Unsupported document format: '{value}'\n\n\
                 Supported formats: pdf, txt, csv"
            ),
        }
    }

    /// Infers the format from the file extension. Used when no format
    /// is declared explicitly; a declared format always wins.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("txt") => Ok(Self::PlainText),
            Some("csv") => Ok(Self::Csv),
            _ => anyhow::bail!(
                "Unsupported document format: '{}'\n\n\
                 Supported formats: pdf, txt, csv\n\
                 Use --format to declare the format explicitly.",
                path.display()
            ),
        }
    }
}
