//! Token types for morphological analysis.
//!
//! Every tokenizer backend normalizes its native output into [`Token`], the
//! common shape the rest of the filter works with:
//!
//! - `surface_form` - the text as it appears in the input
//! - `base_form` - the dictionary form, `None` when the backend reports it absent
//! - `reading` - the katakana reading, `None` when absent
//! - `part_of_speech` - the hierarchical part-of-speech slots, coarsest first
//!
//! # Examples
//!
//! ```
//! use morph_filter::analysis::token::Token;
//!
//! let token = Token::with_offsets("東京", 0, 0, 6)
//!     .with_base_form("東京")
//!     .with_reading("トウキョウ")
//!     .with_part_of_speech(["名詞", "固有名詞", "地域", "一般"]);
//!
//! assert_eq!(token.first_part_of_speech(), Some("名詞"));
//! assert_eq!(token.part_of_speech_tag(), "名詞-固有名詞-地域-一般");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between part-of-speech slots in a hierarchical tag.
pub const PART_OF_SPEECH_SEPARATOR: &str = "-";

/// A single morpheme produced by a tokenizer backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text as it appears in the input
    pub surface_form: String,

    /// The dictionary form, if known
    pub base_form: Option<String>,

    /// The katakana reading, if known
    pub reading: Option<String>,

    /// Part-of-speech slots, coarsest first (e.g. `["名詞", "固有名詞"]`)
    pub part_of_speech: Vec<String>,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given surface form and position.
    pub fn new<S: Into<String>>(surface_form: S, position: usize) -> Self {
        Token {
            surface_form: surface_form.into(),
            base_form: None,
            reading: None,
            part_of_speech: Vec::new(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with surface form, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        surface_form: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let mut token = Token::new(surface_form, position);
        token.start_offset = start_offset;
        token.end_offset = end_offset;
        token
    }

    /// Set the base form.
    pub fn with_base_form<S: Into<String>>(mut self, base_form: S) -> Self {
        self.base_form = Some(base_form.into());
        self
    }

    /// Set the reading.
    pub fn with_reading<S: Into<String>>(mut self, reading: S) -> Self {
        self.reading = Some(reading.into());
        self
    }

    /// Set the part-of-speech slots.
    pub fn with_part_of_speech<I, S>(mut self, part_of_speech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.part_of_speech = part_of_speech.into_iter().map(Into::into).collect();
        self
    }

    /// The coarsest part-of-speech category.
    pub fn first_part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.first().map(String::as_str)
    }

    /// All part-of-speech slots joined into one hierarchical tag.
    pub fn part_of_speech_tag(&self) -> String {
        self.part_of_speech.join(PART_OF_SPEECH_SEPARATOR)
    }

    /// The base form if known, otherwise the surface form.
    pub fn base_or_surface(&self) -> &str {
        self.base_form.as_deref().unwrap_or(&self.surface_form)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface_form)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("都", 1);
        assert_eq!(token.surface_form, "都");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 0);
        assert!(token.base_form.is_none());
        assert!(token.reading.is_none());
        assert!(token.first_part_of_speech().is_none());
        assert_eq!(token.part_of_speech_tag(), "");
    }

    #[test]
    fn test_base_or_surface() {
        let token = Token::new("食べ", 0);
        assert_eq!(token.base_or_surface(), "食べ");
        let token = token.with_base_form("食べる");
        assert_eq!(token.base_or_surface(), "食べる");
    }

    #[test]
    fn test_into_token_stream() {
        let stream = vec![Token::new("a", 0), Token::new("b", 1)].into_token_stream();
        let tokens: Vec<Token> = stream.collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[0].to_string(), "a");
    }
}
