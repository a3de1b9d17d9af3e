//! Input text validation

use crate::utils::error::{Result, SentimentError};

/// Checks analysis input before any cache or model work
#[derive(Debug, Clone, Copy)]
pub struct TextValidator {
    max_chars: usize,
}

impl TextValidator {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Return the trimmed text, or a validation error.
    ///
    /// Length is counted in Unicode scalar values after trimming.
    pub fn validate<'a>(&self, text: &'a str) -> Result<&'a str> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(SentimentError::validation(
                "Text cannot be empty or contain only whitespace",
            ));
        }

        if trimmed.chars().count() > self.max_chars {
            return Err(SentimentError::validation(format!(
                "Text cannot exceed {} characters",
                self.max_chars
            )));
        }

        Ok(trimmed)
    }
}

impl Default for TextValidator {
    fn default() -> Self {
        Self::new(crate::config::default_max_text_length())
    }
}
