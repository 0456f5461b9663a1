//! Plain-text extraction from uploaded documents.

use anyhow::{Context, Result};

use super::media::MediaType;

/// Characters of extracted text shown in the preview.
pub const PREVIEW_CHARS: usize = 1000;

/// Characters of extracted text submitted for analysis.
pub const SUBMISSION_CHARS: usize = 3000;

/// Extracts plain text from an uploaded byte stream.
///
/// PDFs get page-structured extraction; everything else is decoded as
/// raw UTF-8. Errors propagate to the caller's generic handler.
pub fn extract_text(bytes: &[u8], media_type: MediaType) -> Result<String> {
    match media_type {
        MediaType::Pdf => extract_pdf(bytes),
        MediaType::PlainText | MediaType::Csv => {
            String::from_utf8(bytes.to_vec()).context("File is not valid UTF-8 text")
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).context("Failed to extract text from PDF")?;
    Ok(join_pages(&text))
}

/// pdf-extract emits a form feed between pages. Rejoin the page texts
/// with a single newline separator, preserving page order.
fn join_pages(text: &str) -> String {
    let pages: Vec<&str> = text
        .split('\u{0c}')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect();

    if pages.is_empty() {
        text.trim().to_string()
    } else {
        pages.join("\n")
    }
}

/// The bounded preview shown to the user: exactly the first
/// [`PREVIEW_CHARS`] characters when the text is longer.
pub fn preview(text: &str) -> &str {
    truncate_chars(text, PREVIEW_CHARS)
}

/// The bounded slice submitted to the completion client: exactly the
/// first [`SUBMISSION_CHARS`] characters when the text is longer.
pub fn submission(text: &str) -> &str {
    truncate_chars(text, SUBMISSION_CHARS)
}

// Char-based so multi-byte text never splits inside a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
