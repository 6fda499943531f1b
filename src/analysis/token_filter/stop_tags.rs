//! Part-of-speech stop tag filter.
//!
//! Removes tokens whose full hierarchical part-of-speech tag is a stop tag.
//! The default set drops conjunctions, particles, auxiliary verbs, symbols and
//! fillers. Matching is exact: `助詞` does not remove `助詞-格助詞-一般`, which
//! is why every particle subcategory is listed.

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const DEFAULT_JAPANESE_STOP_TAGS: &[&str] = &[
    "接続詞",
    "助詞",
    "助詞-格助詞",
    "助詞-格助詞-一般",
    "助詞-格助詞-引用",
    "助詞-格助詞-連語",
    "助詞-接続助詞",
    "助詞-係助詞",
    "助詞-副助詞",
    "助詞-間投助詞",
    "助詞-並立助詞",
    "助詞-終助詞",
    "助詞-副助詞／並立助詞／終助詞",
    "助詞-連体化",
    "助詞-副詞化",
    "助詞-特殊",
    "助動詞",
    "記号",
    "記号-一般",
    "記号-読点",
    "記号-句点",
    "記号-空白",
    "記号-括弧開",
    "記号-括弧閉",
    "その他-間投",
    "フィラー",
    "非言語音",
];

/// Default Japanese stop tags as a set.
pub static DEFAULT_JAPANESE_STOP_TAGS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_JAPANESE_STOP_TAGS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes tokens tagged with a stop part of speech.
#[derive(Clone, Debug)]
pub struct StopTagsFilter {
    stop_tags: Arc<AHashSet<String>>,
}

impl StopTagsFilter {
    /// Create a new filter with the default Japanese stop tags.
    pub fn new() -> Self {
        Self::with_stop_tags(DEFAULT_JAPANESE_STOP_TAGS_SET.clone())
    }

    /// Create a new filter with custom stop tags.
    pub fn with_stop_tags(stop_tags: AHashSet<String>) -> Self {
        StopTagsFilter {
            stop_tags: Arc::new(stop_tags),
        }
    }

    /// Check if a hierarchical tag is a stop tag.
    pub fn is_stop_tag(&self, tag: &str) -> bool {
        self.stop_tags.contains(tag)
    }
}

impl Default for StopTagsFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopTagsFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_tag(&token.part_of_speech_tag()))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop_tags"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_stop_tags() {
        let filter = StopTagsFilter::new();
        let tokens = vec![
            Token::new("東京", 0).with_part_of_speech(["名詞", "固有名詞", "地域", "一般"]),
            Token::new("に", 1).with_part_of_speech(["助詞", "格助詞", "一般"]),
            Token::new("行く", 2).with_part_of_speech(["動詞", "自立"]),
            Token::new("。", 3).with_part_of_speech(["記号", "句点"]),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        let surfaces: Vec<_> = result.iter().map(|t| t.surface_form.as_str()).collect();
        assert_eq!(surfaces, vec!["東京", "行く"]);
    }

    #[test]
    fn test_exact_tag_match() {
        let filter = StopTagsFilter::with_stop_tags(["助詞".to_string()].into_iter().collect());
        assert!(filter.is_stop_tag("助詞"));
        assert!(!filter.is_stop_tag("助詞-格助詞"));
        assert_eq!(filter.name(), "stop_tags");
    }
}
