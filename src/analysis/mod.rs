//! Text analysis for morphological filtering.
//!
//! This module provides the engine abstraction over a morphological
//! dictionary, the normalized [`Token`] model, token filters, the analysis
//! pipeline and the two tokenizer backends built on top of them.

pub mod analyzer;
pub mod engine;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::{Token, TokenStream};
pub use tokenizer::{PartOfSpeechStage, Tokenizer, build_tokenizer};
