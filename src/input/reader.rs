use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

pub struct InputReader;

impl InputReader {
    /// Reads English source text from a file, or from stdin when no
    /// path is given. Input must be valid UTF-8; no size limit is
    /// enforced here.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    /// Reads a document upload as raw bytes. Decoding is the
    /// extractor's job, not ours.
    pub fn read_bytes(path: &str) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_file(path: &str) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }
}
