//! Part-of-speech allow-list filter.
//!
//! With no allow-list every token passes. Otherwise a token passes if it
//! matches at least one entry, using one of two policies:
//!
//! - [`PartOfSpeechMatch::FirstFeature`] compares the coarsest category for
//!   equality. The dictionary tokenizer uses this.
//! - [`PartOfSpeechMatch::Prefix`] tests whether the full hierarchical tag starts
//!   with the entry, so `名詞` admits `名詞-固有名詞-地域-一般`. The analyzer
//!   pipeline tokenizer uses this.
//!
//! ```
//! use morph_filter::analysis::token::Token;
//! use morph_filter::analysis::token_filter::part_of_speech::{PartOfSpeechFilter, PartOfSpeechMatch};
//!
//! let token = Token::new("東京", 0).with_part_of_speech(["名詞", "固有名詞"]);
//!
//! let exact = PartOfSpeechFilter::new(Some(vec!["名詞-固有名詞".to_string()]), PartOfSpeechMatch::FirstFeature);
//! assert!(!exact.allows(&token));
//!
//! let prefix = PartOfSpeechFilter::new(Some(vec!["名詞-固有名詞".to_string()]), PartOfSpeechMatch::Prefix);
//! assert!(prefix.allows(&token));
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// How an allow-list entry is compared with a token's part of speech.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartOfSpeechMatch {
    /// The first part-of-speech slot equals the entry
    FirstFeature,
    /// The hierarchical tag starts with the entry
    Prefix,
}

/// Keeps tokens whose part of speech is allow-listed.
#[derive(Clone, Debug)]
pub struct PartOfSpeechFilter {
    allowed: Option<Vec<String>>,
    policy: PartOfSpeechMatch,
}

impl PartOfSpeechFilter {
    /// Create a filter. `None` admits every token.
    pub fn new(allowed: Option<Vec<String>>, policy: PartOfSpeechMatch) -> Self {
        PartOfSpeechFilter { allowed, policy }
    }

    /// Get the matching policy.
    pub fn policy(&self) -> PartOfSpeechMatch {
        self.policy
    }

    /// Check whether this filter admits every token.
    pub fn is_unrestricted(&self) -> bool {
        self.allowed.is_none()
    }

    /// Check whether a token passes the allow-list.
    pub fn allows(&self, token: &Token) -> bool {
        let Some(allowed) = &self.allowed else {
            return true;
        };

        match self.policy {
            PartOfSpeechMatch::FirstFeature => {
                let first = token.first_part_of_speech().unwrap_or_default();
                allowed.iter().any(|entry| entry == first)
            }
            PartOfSpeechMatch::Prefix => {
                let tag = token.part_of_speech_tag();
                allowed.iter().any(|entry| tag.starts_with(entry.as_str()))
            }
        }
    }
}

impl Filter for PartOfSpeechFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.is_unrestricted() {
            return Ok(tokens);
        }

        let filtered_tokens: Vec<Token> = tokens.filter(|token| self.allows(token)).collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "part_of_speech"
    }
}
