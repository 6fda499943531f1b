//! Token filters applied to tokenizer output.
//!
//! - [`base_form::BaseFormFilter`] - rewrites inflected tokens to their base form
//! - [`cjk_width::CjkWidthFilter`] - folds full-width Latin and half-width kana
//! - [`katakana_stem::KatakanaStemFilter`] - drops a trailing long vowel mark
//! - [`lowercase::LowercaseFilter`] - lowercases token text
//! - [`part_of_speech::PartOfSpeechFilter`] - keeps tokens whose category is allow-listed
//! - [`stop::StopFilter`] - removes Japanese stop words
//! - [`stop_tags::StopTagsFilter`] - removes tokens with stop part-of-speech tags
//!
//! Filters are chained by [`PipelineAnalyzer`](crate::analysis::analyzer::pipeline::PipelineAnalyzer).
//! The analyzer tokenizer backend uses:
//!
//! ```text
//! Engine → Base Form → Stop Tags → Width → Stop Words → Katakana Stem → Lowercase → Part of Speech
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod base_form;
pub mod cjk_width;
pub mod katakana_stem;
pub mod lowercase;
pub mod part_of_speech;
pub mod stop;
pub mod stop_tags;

pub use base_form::BaseFormFilter;
pub use cjk_width::CjkWidthFilter;
pub use katakana_stem::KatakanaStemFilter;
pub use lowercase::LowercaseFilter;
pub use part_of_speech::{PartOfSpeechFilter, PartOfSpeechMatch};
pub use stop::StopFilter;
pub use stop_tags::StopTagsFilter;
