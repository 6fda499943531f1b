//! Filter configuration.
//!
//! A [`FilterConfig`] is parsed once when a stream is opened and is immutable
//! afterwards. The JSON form uses the option names below:
//!
//! ```json
//! {
//!   "key_names": ["title", "body"],
//!   "tokenizer": "kuromoji",
//!   "mode": "normal",
//!   "dictionary_path": "/path/to/userdict.csv",
//!   "ok_parts_of_speech": ["名詞"],
//!   "keep_input": true,
//!   "settings": [
//!     { "suffix": "_surface", "method": "surface_form", "delimiter": " " },
//!     { "suffix": "_base", "method": "base_form", "type": "array" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{FilterError, Result};
use crate::schema::column::ColumnType;

/// Delimiter used when a setting does not name one.
pub const DEFAULT_DELIMITER: &str = ",";

/// Token attribute extracted by a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Dictionary (uninflected) form
    BaseForm,
    /// Katakana reading
    Reading,
    /// Text as it appears in the input
    SurfaceForm,
}

impl Method {
    /// Read this attribute from a token. `None` means the backend reported it absent.
    pub fn extract<'a>(&self, token: &'a Token) -> Option<&'a str> {
        match self {
            Method::BaseForm => token.base_form.as_deref(),
            Method::Reading => token.reading.as_deref(),
            Method::SurfaceForm => Some(token.surface_form.as_str()),
        }
    }
}

/// Shape of the derived value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    /// Attributes joined with the delimiter into one STRING value
    #[default]
    String,
    /// Attributes kept as an ordered JSON array
    #[serde(alias = "json", alias = "list")]
    Array,
}

/// One derived output column per key field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSetting {
    /// Appended to the key field name; absent or empty reuses the key field's own column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Attribute to extract from every token
    pub method: Method,
    /// Join delimiter for STRING output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Output shape
    #[serde(default, rename = "type")]
    pub output_type: OutputType,
}

impl ExtractionSetting {
    /// Create a setting with no suffix, the default delimiter and STRING output.
    pub fn new(method: Method) -> Self {
        ExtractionSetting {
            suffix: None,
            method,
            delimiter: None,
            output_type: OutputType::String,
        }
    }

    /// Set the output column suffix.
    pub fn with_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the join delimiter.
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Emit an ordered list instead of a joined string.
    pub fn as_list(mut self) -> Self {
        self.output_type = OutputType::Array;
        self
    }

    /// The suffix, empty when unset.
    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }

    /// The join delimiter, `","` when unset.
    pub fn delimiter(&self) -> &str {
        self.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER)
    }

    /// Whether the output is a list value.
    pub fn output_is_list(&self) -> bool {
        self.output_type == OutputType::Array
    }

    /// Output column name for the given key field.
    pub fn output_name(&self, key_name: &str) -> String {
        format!("{key_name}{}", self.suffix())
    }

    /// Column type of the derived value.
    pub fn column_type(&self) -> ColumnType {
        if self.output_is_list() {
            ColumnType::Json
        } else {
            ColumnType::String
        }
    }
}

/// Tokenizer backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Dictionary tokenizer over IPADIC
    #[default]
    Kuromoji,
    /// Analyzer pipeline over the NEologd-extended IPADIC
    Neologd,
}

impl TokenizerKind {
    /// Get the configuration name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Kuromoji => "kuromoji",
            TokenizerKind::Neologd => "neologd",
        }
    }

    /// Dictionary URI used when `system_dictionary` is not configured.
    pub fn default_dictionary(&self) -> &'static str {
        match self {
            TokenizerKind::Kuromoji => "embedded://ipadic",
            TokenizerKind::Neologd => "embedded://ipadic-neologd",
        }
    }
}

/// Segmentation mode of the analyzer pipeline backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Plain lattice segmentation
    #[default]
    Normal,
    /// Long compound nouns are decomposed
    Search,
    /// Search mode plus unknown words split into single characters
    Extended,
}

impl Mode {
    /// Lindera segmentation mode name.
    pub fn segmenter_mode(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Search | Mode::Extended => "decompose",
        }
    }

    /// Whether unknown words are split into unigrams.
    pub fn splits_unknown(&self) -> bool {
        *self == Mode::Extended
    }
}

fn default_keep_input() -> bool {
    true
}

/// Complete configuration of one filter instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// STRING input columns to tokenize, in processing order
    pub key_names: Vec<String>,
    /// Tokenizer backend
    #[serde(default)]
    pub tokenizer: TokenizerKind,
    /// Segmentation mode (analyzer pipeline backend only)
    #[serde(default)]
    pub mode: Mode,
    /// Reserved; parsed and ignored
    #[serde(default)]
    pub use_stop_tag: bool,
    /// Optional user dictionary file
    #[serde(default)]
    pub dictionary_path: Option<String>,
    /// Optional system dictionary URI overriding the backend default
    #[serde(default)]
    pub system_dictionary: Option<String>,
    /// Optional part-of-speech allow-list
    #[serde(default)]
    pub ok_parts_of_speech: Option<Vec<String>>,
    /// Whether input columns are passed through
    #[serde(default = "default_keep_input")]
    pub keep_input: bool,
    /// Derived outputs, applied to every key field in order
    pub settings: Vec<ExtractionSetting>,
}

impl FilterConfig {
    /// Create a configuration with default options.
    pub fn new<I, S>(key_names: I, settings: Vec<ExtractionSetting>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterConfig {
            key_names: key_names.into_iter().map(Into::into).collect(),
            tokenizer: TokenizerKind::default(),
            mode: Mode::default(),
            use_stop_tag: false,
            dictionary_path: None,
            system_dictionary: None,
            ok_parts_of_speech: None,
            keep_input: default_keep_input(),
            settings,
        }
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FilterConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Set the tokenizer backend.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the segmentation mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether input columns are passed through.
    pub fn with_keep_input(mut self, keep_input: bool) -> Self {
        self.keep_input = keep_input;
        self
    }

    /// Set the part-of-speech allow-list.
    pub fn with_ok_parts_of_speech<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ok_parts_of_speech = Some(parts.into_iter().map(Into::into).collect());
        self
    }

    /// Set the user dictionary path.
    pub fn with_dictionary_path<S: Into<String>>(mut self, path: S) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    /// Dictionary URI the backend loads.
    pub fn system_dictionary(&self) -> &str {
        self.system_dictionary
            .as_deref()
            .unwrap_or_else(|| self.tokenizer.default_dictionary())
    }

    /// Check the configuration for errors that do not need an input schema.
    pub fn validate(&self) -> Result<()> {
        if self.key_names.is_empty() {
            return Err(FilterError::configuration("key_names must not be empty"));
        }

        let mut seen = AHashSet::new();
        for name in &self.key_names {
            if !seen.insert(name.as_str()) {
                return Err(FilterError::configuration(format!(
                    "Key field '{name}' is listed more than once"
                )));
            }
        }

        if self.settings.is_empty() {
            return Err(FilterError::configuration("settings must not be empty"));
        }

        Ok(())
    }
}
