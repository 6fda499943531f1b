//! Katakana stem filter.
//!
//! Drops one trailing prolonged sound mark (`ー`) from katakana words of at
//! least four characters, so `コンピューター` and `コンピュータ` match.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Shortest katakana word that is stemmed.
pub const DEFAULT_MINIMUM_LENGTH: usize = 4;

const PROLONGED_SOUND_MARK: char = 'ー';

/// A filter that normalizes the trailing long vowel of katakana words.
#[derive(Clone, Debug)]
pub struct KatakanaStemFilter {
    minimum_length: usize,
}

impl KatakanaStemFilter {
    /// Create a new filter with the default minimum length.
    pub fn new() -> Self {
        Self::with_minimum_length(DEFAULT_MINIMUM_LENGTH)
    }

    /// Create a new filter stemming words of at least `minimum_length` characters.
    pub fn with_minimum_length(minimum_length: usize) -> Self {
        KatakanaStemFilter { minimum_length }
    }

    /// Stem a single word.
    pub fn stem<'a>(&self, word: &'a str) -> &'a str {
        if word.chars().count() < self.minimum_length
            || !word.chars().all(|c| ('\u{30A0}'..='\u{30FF}').contains(&c))
        {
            return word;
        }
        word.strip_suffix(PROLONGED_SOUND_MARK).unwrap_or(word)
    }
}

impl Default for KatakanaStemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for KatakanaStemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|mut token| {
                let stemmed = self.stem(&token.surface_form);
                if stemmed.len() != token.surface_form.len() {
                    token.surface_form = stemmed.to_string();
                }
                token
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "katakana_stem"
    }
}
