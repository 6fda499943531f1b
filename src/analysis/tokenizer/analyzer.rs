use std::sync::Arc;

use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::engine::MorphologicalEngine;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::base_form::BaseFormFilter;
use crate::analysis::token_filter::cjk_width::CjkWidthFilter;
use crate::analysis::token_filter::katakana_stem::KatakanaStemFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::part_of_speech::{PartOfSpeechFilter, PartOfSpeechMatch};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::stop_tags::StopTagsFilter;
use crate::analysis::tokenizer::{PartOfSpeechStage, Tokenizer};
use crate::config::Mode;
use crate::error::Result;

/// Analyzer pipeline tokenizer backend (`neologd`).
///
/// Token text is normalized before it is returned: inflected words are
/// rewritten to their base form, character width is folded, a trailing
/// katakana long vowel is dropped and Latin letters are lowercased. Tokens
/// with a default stop tag or stop word, or outside the part-of-speech
/// allow-list (prefix match), are removed. A base form or reading the
/// dictionary does not provide stays `None`.
#[derive(Debug, Clone)]
pub struct AnalyzerTokenizer {
    analyzer: PipelineAnalyzer,
    mode: Mode,
}

impl AnalyzerTokenizer {
    /// Create a new analyzer tokenizer over an engine.
    pub fn new(
        engine: Arc<dyn MorphologicalEngine>,
        mode: Mode,
        ok_parts_of_speech: Option<Vec<String>>,
    ) -> Self {
        let analyzer = PipelineAnalyzer::new(engine)
            .split_unknown(mode.splits_unknown())
            .add_filter(Arc::new(BaseFormFilter::new()))
            .add_filter(Arc::new(StopTagsFilter::new()))
            .add_filter(Arc::new(CjkWidthFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(KatakanaStemFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PartOfSpeechFilter::new(
                ok_parts_of_speech,
                PartOfSpeechMatch::Prefix,
            )));

        AnalyzerTokenizer { analyzer, mode }
    }

    /// Get the segmentation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the underlying analysis pipeline.
    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }
}

impl Tokenizer for AnalyzerTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        self.analyzer.analyze(text)
    }

    fn name(&self) -> &'static str {
        "neologd"
    }

    fn part_of_speech_stage(&self) -> PartOfSpeechStage {
        PartOfSpeechStage::Tokenization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::Morpheme;
    use crate::analysis::token::Token;

    struct ListEngine(Vec<Morpheme>);

    impl MorphologicalEngine for ListEngine {
        fn segment(&self, _text: &str) -> Result<Vec<Morpheme>> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "list"
        }
    }

    fn engine() -> Arc<dyn MorphologicalEngine> {
        Arc::new(ListEngine(vec![
            Morpheme::new(
                "東京",
                ["名詞", "固有名詞", "地域", "一般", "*", "*", "東京", "トウキョウ", "トーキョー"],
            ),
            Morpheme::new("に", ["助詞", "格助詞", "一般", "*", "*", "*", "に", "ニ", "ニ"]),
            Morpheme::new(
                "住ん",
                ["動詞", "自立", "*", "*", "五段・マ行", "連用タ接続", "住む", "スン", "スン"],
            ),
            Morpheme::new("でる", ["動詞", "非自立", "*", "*", "*", "*", "*"]),
        ]))
    }

    #[test]
    fn test_stop_tags_applied() {
        let tokenizer = AnalyzerTokenizer::new(engine(), Mode::Normal, None);

        let surfaces: Vec<String> = tokenizer
            .tokenize("東京に住んでる")
            .unwrap()
            .map(|t| t.surface_form)
            .collect();

        assert_eq!(surfaces, vec!["東京", "住む", "でる"]);
        assert_eq!(tokenizer.name(), "neologd");
        assert_eq!(tokenizer.part_of_speech_stage(), PartOfSpeechStage::Tokenization);
    }

    #[test]
    fn test_prefix_allow_list_applied_inside() {
        let tokenizer = AnalyzerTokenizer::new(
            engine(),
            Mode::Search,
            Some(vec!["動詞-自立".to_string()]),
        );

        let tokens: Vec<Token> = tokenizer.tokenize("東京に住んでる").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].base_form.as_deref(), Some("住む"));
        assert_eq!(tokenizer.mode(), Mode::Search);
    }

    #[test]
    fn test_absent_attributes_stay_absent() {
        let tokenizer = AnalyzerTokenizer::new(engine(), Mode::Normal, None);

        let tokens: Vec<Token> = tokenizer.tokenize("東京に住んでる").unwrap().collect();
        let last = tokens.last().unwrap();

        assert_eq!(last.surface_form, "でる");
        assert_eq!(last.base_form, None);
        assert_eq!(last.reading, None);
    }

    #[test]
    fn test_extended_mode_splits_unknown() {
        let engine = Arc::new(ListEngine(vec![
            Morpheme::new("ぽよ", ["名詞", "一般", "*", "*", "*", "*", "*"]).unknown(),
        ]));
        let tokenizer = AnalyzerTokenizer::new(engine, Mode::Extended, None);

        let surfaces: Vec<String> = tokenizer
            .tokenize("ぽよ")
            .unwrap()
            .map(|t| t.surface_form)
            .collect();

        assert_eq!(surfaces, vec!["ぽ", "よ"]);
        assert_eq!(tokenizer.analyzer().filters().len(), 7);
    }

    #[test]
    fn test_surface_form_is_normalized() {
        let engine = Arc::new(ListEngine(vec![
            Morpheme::new(
                "走っ",
                ["動詞", "自立", "*", "*", "五段・ラ行", "連用タ接続", "走る", "ハシッ", "ハシッ"],
            ),
            Morpheme::new("ＡＢＣ", ["名詞", "一般", "*", "*", "*", "*", "*"]).unknown(),
            Morpheme::new("ｻｰﾊﾞｰ", ["名詞", "一般", "*", "*", "*", "*", "*"]).unknown(),
        ]));
        let tokenizer = AnalyzerTokenizer::new(engine, Mode::Normal, None);

        let tokens: Vec<Token> = tokenizer.tokenize("走っＡＢＣｻｰﾊﾞｰ").unwrap().collect();
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface_form.as_str()).collect();

        assert_eq!(surfaces, vec!["走る", "abc", "サーバ"]);
        assert_eq!(tokens[0].reading.as_deref(), Some("ハシッ"));
        assert_eq!(tokens[1].base_form, None);
    }
}
