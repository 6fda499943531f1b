//! Pipeline analyzer that combines a morphological engine and token filters.
//!
//! # Architecture
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Engine: segments raw text into morphemes
//! 2. Normalization: morphemes become tokens; absent attributes stay absent,
//!    and unknown words are split into single characters when enabled
//! 3. Token Filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use morph_filter::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use morph_filter::analysis::engine::{Morpheme, MorphologicalEngine};
//! use morph_filter::analysis::token_filter::stop_tags::StopTagsFilter;
//! use morph_filter::error::Result;
//!
//! struct Fixed;
//!
//! impl MorphologicalEngine for Fixed {
//!     fn segment(&self, _text: &str) -> Result<Vec<Morpheme>> {
//!         Ok(vec![
//!             Morpheme::new("猫", ["名詞", "一般"]),
//!             Morpheme::new("が", ["助詞", "格助詞", "一般"]),
//!         ])
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "fixed"
//!     }
//! }
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(Fixed))
//!     .add_filter(Arc::new(StopTagsFilter::new()));
//!
//! let tokens: Vec<_> = analyzer.analyze("猫が").unwrap().collect();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].surface_form, "猫");
//! ```

use std::sync::Arc;

use crate::analysis::engine::{Morpheme, MorphologicalEngine};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A configurable analyzer that combines an engine with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    engine: Arc<dyn MorphologicalEngine>,
    filters: Vec<Arc<dyn Filter>>,
    split_unknown: bool,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer over the given engine.
    pub fn new(engine: Arc<dyn MorphologicalEngine>) -> Self {
        PipelineAnalyzer {
            engine,
            filters: Vec::new(),
            split_unknown: false,
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Split unknown words into single-character tokens.
    pub fn split_unknown(mut self, split: bool) -> Self {
        self.split_unknown = split;
        self
    }

    /// Get the engine used by this analyzer.
    pub fn engine(&self) -> &Arc<dyn MorphologicalEngine> {
        &self.engine
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Analyze text into a filtered token stream.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let morphemes = self.engine.segment(text)?;

        let mut tokens = Vec::with_capacity(morphemes.len());
        for morpheme in &morphemes {
            if self.split_unknown && morpheme.unknown && morpheme.surface.chars().count() > 1 {
                Self::push_unigrams(&mut tokens, morpheme);
            } else {
                let position = tokens.len();
                tokens.push(Self::normalize(morpheme, position));
            }
        }

        let mut stream: TokenStream = Box::new(tokens.into_iter());
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }

        Ok(stream)
    }

    fn normalize(morpheme: &Morpheme, position: usize) -> Token {
        let mut token = Token::with_offsets(
            morpheme.surface.clone(),
            position,
            morpheme.byte_start,
            morpheme.byte_end,
        )
        .with_part_of_speech(morpheme.part_of_speech());
        token.base_form = morpheme.base_form().map(String::from);
        token.reading = morpheme.reading().map(String::from);
        token
    }

    fn push_unigrams(tokens: &mut Vec<Token>, morpheme: &Morpheme) {
        let part_of_speech = morpheme.part_of_speech();
        for (offset, ch) in morpheme.surface.char_indices() {
            let start = morpheme.byte_start + offset;
            let position = tokens.len();
            tokens.push(
                Token::with_offsets(ch.to_string(), position, start, start + ch.len_utf8())
                    .with_part_of_speech(part_of_speech.iter().cloned()),
            );
        }
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("engine", &self.engine.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("split_unknown", &self.split_unknown)
            .finish()
    }
}
