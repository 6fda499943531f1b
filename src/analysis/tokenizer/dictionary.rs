use std::sync::Arc;

use crate::analysis::engine::MorphologicalEngine;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::part_of_speech::PartOfSpeechMatch;
use crate::analysis::tokenizer::{PartOfSpeechStage, Tokenizer};
use crate::error::Result;

/// Dictionary tokenizer backend (`kuromoji`).
///
/// Every morpheme becomes a token; a base form or reading the dictionary does
/// not provide is replaced with the surface form.
#[derive(Clone)]
pub struct DictionaryTokenizer {
    engine: Arc<dyn MorphologicalEngine>,
}

impl DictionaryTokenizer {
    /// Create a new dictionary tokenizer over an engine.
    pub fn new(engine: Arc<dyn MorphologicalEngine>) -> Self {
        DictionaryTokenizer { engine }
    }
}

impl Tokenizer for DictionaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for (position, morpheme) in self.engine.segment(text)?.into_iter().enumerate() {
            let base_form = morpheme.base_form().unwrap_or(&morpheme.surface).to_string();
            let reading = morpheme.reading().unwrap_or(&morpheme.surface).to_string();
            let part_of_speech = morpheme.part_of_speech();

            tokens.push(
                Token::with_offsets(
                    morpheme.surface,
                    position,
                    morpheme.byte_start,
                    morpheme.byte_end,
                )
                .with_base_form(base_form)
                .with_reading(reading)
                .with_part_of_speech(part_of_speech),
            );
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "kuromoji"
    }

    fn part_of_speech_stage(&self) -> PartOfSpeechStage {
        PartOfSpeechStage::Aggregation(PartOfSpeechMatch::FirstFeature)
    }
}

impl std::fmt::Debug for DictionaryTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryTokenizer")
            .field("engine", &self.engine.name())
            .finish()
    }
}
