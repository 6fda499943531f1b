//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use morph_filter::analysis::token_filter::Filter;
//! use morph_filter::analysis::token_filter::lowercase::LowercaseFilter;
//! use morph_filter::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Rust", 0), Token::new("ＡＰＩ", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].surface_form, "rust");
//! assert_eq!(filtered[1].surface_form, "ａｐｉ");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts token text to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|mut token| {
                if token.surface_form.chars().any(char::is_uppercase) {
                    token.surface_form = token.surface_form.to_lowercase();
                }
                token
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("Hello", 0), Token::new("東京", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].surface_form, "hello");
        assert_eq!(result[1].surface_form, "東京");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
