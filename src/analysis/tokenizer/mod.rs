//! Tokenizer backends.
//!
//! Two backends normalize different analysis models into [`Token`](crate::analysis::token::Token)s:
//!
//! - [`DictionaryTokenizer`] (`kuromoji`) maps every morpheme directly,
//!   substituting the surface form for a missing base form or reading. Its
//!   part-of-speech allow-list is applied later, while aggregating, by
//!   comparing the first category slot.
//! - [`AnalyzerTokenizer`] (`neologd`) runs an analysis pipeline with a
//!   segmentation mode, stop tags and stop words, and applies the allow-list
//!   itself by tag prefix. Missing attributes stay missing.
//!
//! The difference in filtering stage is reported by
//! [`Tokenizer::part_of_speech_stage`] so callers never have to guess.

use std::sync::Arc;

use crate::analysis::engine::LinderaEngine;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::part_of_speech::PartOfSpeechMatch;
use crate::config::{FilterConfig, TokenizerKind};
use crate::error::Result;

pub mod analyzer;
pub mod dictionary;

pub use analyzer::AnalyzerTokenizer;
pub use dictionary::DictionaryTokenizer;

/// Where a backend expects the part-of-speech allow-list to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartOfSpeechStage {
    /// The caller filters tokens while aggregating, with the given policy
    Aggregation(PartOfSpeechMatch),
    /// Tokens are already filtered when `tokenize` returns
    Tokenization,
}

/// Trait for tokenizer backends that convert text into normalized tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Where the part-of-speech allow-list is applied for this backend.
    fn part_of_speech_stage(&self) -> PartOfSpeechStage;
}

/// Build the backend selected by `config.tokenizer`.
///
/// Dictionary problems surface here as backend initialization errors naming
/// the offending path; nothing is retried.
pub fn build_tokenizer(config: &FilterConfig) -> Result<Arc<dyn Tokenizer>> {
    let dictionary = config.system_dictionary();
    let user_dictionary = config.dictionary_path.as_deref();

    let tokenizer: Arc<dyn Tokenizer> = match config.tokenizer {
        TokenizerKind::Kuromoji => {
            let engine = LinderaEngine::new("normal", dictionary, user_dictionary)?;
            Arc::new(DictionaryTokenizer::new(Arc::new(engine)))
        }
        TokenizerKind::Neologd => {
            let engine =
                LinderaEngine::new(config.mode.segmenter_mode(), dictionary, user_dictionary)?;
            Arc::new(AnalyzerTokenizer::new(
                Arc::new(engine),
                config.mode,
                config.ok_parts_of_speech.clone(),
            ))
        }
    };

    Ok(tokenizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExtractionSetting, Method};
    use crate::error::FilterError;

    fn config() -> FilterConfig {
        FilterConfig::new(["text"], vec![ExtractionSetting::new(Method::SurfaceForm)])
    }

    #[test]
    fn test_build_kuromoji() {
        let tokenizer = build_tokenizer(&config()).unwrap();

        assert_eq!(tokenizer.name(), "kuromoji");
        assert_eq!(
            tokenizer.part_of_speech_stage(),
            PartOfSpeechStage::Aggregation(PartOfSpeechMatch::FirstFeature)
        );
        let surfaces: Vec<String> = tokenizer
            .tokenize("東京都")
            .unwrap()
            .map(|t| t.surface_form)
            .collect();
        assert_eq!(surfaces, vec!["東京", "都"]);
    }

    #[test]
    fn test_build_reports_bad_user_dictionary() {
        let config = config().with_dictionary_path("/nonexistent/user.csv");

        match build_tokenizer(&config) {
            Err(FilterError::BackendInitialization { path, .. }) => {
                assert_eq!(path.as_deref(), Some("/nonexistent/user.csv"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected a backend initialization error"),
        }
    }
}
