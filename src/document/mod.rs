mod extract;
mod media;

pub use extract::{PREVIEW_CHARS, SUBMISSION_CHARS, extract_text, preview, submission};
pub use media::MediaType;
