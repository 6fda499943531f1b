//! Base form filter.
//!
//! Replaces the surface form of an inflected token with its dictionary form,
//! so `走っ` becomes `走る`. Tokens without a known base form are unchanged.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that rewrites token text to the base form.
#[derive(Clone, Debug, Default)]
pub struct BaseFormFilter;

impl BaseFormFilter {
    /// Create a new base form filter.
    pub fn new() -> Self {
        BaseFormFilter
    }
}

impl Filter for BaseFormFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|mut token| {
                if let Some(base_form) = &token.base_form {
                    token.surface_form = base_form.clone();
                }
                token
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "base_form"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_form_filter() {
        let filter = BaseFormFilter::new();
        let tokens = vec![
            Token::new("走っ", 0).with_base_form("走る").with_reading("ハシッ"),
            Token::new("ぽよ", 1),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].surface_form, "走る");
        assert_eq!(result[0].reading.as_deref(), Some("ハシッ"));
        assert_eq!(result[1].surface_form, "ぽよ");
        assert_eq!(result[1].base_form, None);
        assert_eq!(filter.name(), "base_form");
    }
}
