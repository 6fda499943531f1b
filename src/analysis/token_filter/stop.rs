//! Stop word filter.
//!
//! Removes Japanese function words that carry little meaning on their own.
//! A token is matched by its base form, falling back to the surface form, so
//! inflected forms of a stop word are removed as well.
//!
//! # Examples
//!
//! ```
//! use morph_filter::analysis::token_filter::Filter;
//! use morph_filter::analysis::token_filter::stop::StopFilter;
//! use morph_filter::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("東京", 0),
//!     Token::new("の", 1),
//!     Token::new("空", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].surface_form, "東京");
//! assert_eq!(result[1].surface_form, "空");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default Japanese stop words.
const DEFAULT_JAPANESE_STOP_WORDS: &[&str] = &[
    "の",
    "に",
    "は",
    "を",
    "た",
    "が",
    "で",
    "て",
    "と",
    "し",
    "れ",
    "さ",
    "ある",
    "いる",
    "も",
    "する",
    "から",
    "な",
    "こと",
    "として",
    "い",
    "や",
    "れる",
    "など",
    "なっ",
    "ない",
    "この",
    "ため",
    "その",
    "あっ",
    "よう",
    "また",
    "もの",
    "という",
    "あり",
    "まで",
    "られ",
    "なる",
    "へ",
    "か",
    "だ",
    "これ",
    "によって",
    "により",
    "おり",
    "より",
    "による",
    "ず",
    "なり",
    "られる",
    "において",
    "ば",
    "なかっ",
    "なく",
    "しかし",
    "について",
    "せ",
    "だっ",
    "その後",
    "できる",
    "それ",
    "う",
    "ので",
    "なお",
    "のみ",
    "でき",
    "き",
    "つ",
    "における",
    "および",
    "いう",
    "さらに",
    "でも",
    "ら",
    "たり",
    "その他",
    "に関する",
    "たち",
    "ます",
    "ん",
    "なら",
    "に対して",
    "特に",
    "せる",
    "及び",
    "これら",
    "とき",
    "では",
    "にて",
    "ほか",
    "ながら",
    "うち",
    "そして",
    "とともに",
    "ただし",
    "かつて",
    "それぞれ",
    "または",
    "お",
    "ほど",
    "ものの",
    "に対する",
    "ほとんど",
    "と共に",
    "といった",
    "です",
    "とも",
    "ところ",
    "ここ",
];

/// Default Japanese stop words as a set.
pub static DEFAULT_JAPANESE_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_JAPANESE_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// # Examples
///
/// ```
/// use morph_filter::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::new();
/// assert!(filter.is_stop_word("の"));
/// assert!(!filter.is_stop_word("東京"));
///
/// let custom = StopFilter::from_words(vec!["えー", "あの"]);
/// assert_eq!(custom.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Japanese stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_JAPANESE_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(token.base_or_surface()))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["は", "です"]);
        let tokens = vec![
            Token::new("今日", 0),
            Token::new("は", 1),
            Token::new("晴れ", 2),
            Token::new("です", 3),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].surface_form, "今日");
        assert_eq!(result[1].surface_form, "晴れ");
    }

    #[test]
    fn test_matches_base_form() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("し", 0).with_base_form("する"),
            Token::new("走っ", 1).with_base_form("走る"),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].surface_form, "走っ");
    }

    #[test]
    fn test_default_list() {
        let filter = StopFilter::default();
        assert_eq!(filter.len(), DEFAULT_JAPANESE_STOP_WORDS.len());
        assert!(filter.is_stop_word("について"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
