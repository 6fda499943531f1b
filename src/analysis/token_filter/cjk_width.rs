//! CJK width folding filter.
//!
//! Folds full-width ASCII variants (`Ａ`, `１`, `！`) to their basic Latin
//! forms and half-width katakana (`ｱ`, `ｶﾞ`) to full-width katakana. A
//! half-width voiced or semi-voiced sound mark is merged into the preceding
//! kana when a combined form exists.
//!
//! # Examples
//!
//! ```
//! use morph_filter::analysis::token_filter::cjk_width::fold_width;
//!
//! assert_eq!(fold_width("ＡＢＣ１２３"), "ABC123");
//! assert_eq!(fold_width("ｶﾞｲﾄﾞ"), "ガイド");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Full-width katakana for U+FF65 through U+FF9F.
const HALF_WIDTH_KANA: [char; 59] = [
    '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー', 'ア', 'イ', 'ウ', 'エ',
    'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト',
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ',
    'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', '\u{3099}', '\u{309A}',
];

const HALF_WIDTH_VOICED_MARK: char = '\u{FF9E}';
const HALF_WIDTH_SEMI_VOICED_MARK: char = '\u{FF9F}';

fn voiced(c: char) -> Option<char> {
    let voiced = match c {
        'カ' | 'キ' | 'ク' | 'ケ' | 'コ' | 'サ' | 'シ' | 'ス' | 'セ' | 'ソ' | 'タ' | 'チ' | 'ツ'
        | 'テ' | 'ト' | 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 1)?,
        'ウ' => 'ヴ',
        'ワ' => 'ヷ',
        'ヲ' => 'ヺ',
        _ => return None,
    };
    Some(voiced)
}

fn semi_voiced(c: char) -> Option<char> {
    match c {
        'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 2),
        _ => None,
    }
}

/// Fold the width of CJK and Latin characters in `text`.
pub fn fold_width(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\u{FF01}'..='\u{FF5E}' => {
                folded.extend(char::from_u32(c as u32 - 0xFEE0));
            }
            HALF_WIDTH_VOICED_MARK | HALF_WIDTH_SEMI_VOICED_MARK => {
                let combined = folded.chars().last().and_then(|prev| {
                    if c == HALF_WIDTH_VOICED_MARK {
                        voiced(prev)
                    } else {
                        semi_voiced(prev)
                    }
                });
                match combined {
                    Some(combined) => {
                        folded.pop();
                        folded.push(combined);
                    }
                    None => folded.push(HALF_WIDTH_KANA[(c as u32 - 0xFF65) as usize]),
                }
            }
            '\u{FF65}'..='\u{FF9D}' => folded.push(HALF_WIDTH_KANA[(c as u32 - 0xFF65) as usize]),
            _ => folded.push(c),
        }
    }

    folded
}

/// A filter that folds character width in token text.
#[derive(Clone, Debug, Default)]
pub struct CjkWidthFilter;

impl CjkWidthFilter {
    /// Create a new width folding filter.
    pub fn new() -> Self {
        CjkWidthFilter
    }
}

impl Filter for CjkWidthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|mut token| {
                token.surface_form = fold_width(&token.surface_form);
                token
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "cjk_width"
    }
}
