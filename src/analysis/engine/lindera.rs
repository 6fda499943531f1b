use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::analysis::engine::{Morpheme, MorphologicalEngine};
use crate::error::{FilterError, Result};

/// Morphological engine backed by Lindera.
pub struct LinderaEngine {
    inner: Segmenter,
}

impl LinderaEngine {
    /// Create a new Lindera engine.
    ///
    /// `dict_uri` names the system dictionary (e.g. `embedded://ipadic`);
    /// `user_dict_path` optionally points at a user dictionary file. Any load
    /// failure is reported with the offending path.
    pub fn new(mode_str: &str, dict_uri: &str, user_dict_path: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode_str).map_err(|e| {
            FilterError::backend_initialization(
                None::<String>,
                format!("Invalid mode '{mode_str}': {e}"),
            )
        })?;
        let dict = load_dictionary(dict_uri).map_err(|e| {
            FilterError::backend_initialization(
                Some(dict_uri),
                format!("Failed to load dictionary: {e}"),
            )
        })?;
        let metadata = &dict.metadata;
        let user_dict = match user_dict_path {
            Some(path) => Some(load_user_dictionary(path, metadata).map_err(|e| {
                FilterError::backend_initialization(
                    Some(path),
                    format!("Failed to load user dictionary: {e}"),
                )
            })?),
            None => None,
        };
        let inner = Segmenter::new(mode, dict, user_dict);

        Ok(Self { inner })
    }
}

impl MorphologicalEngine for LinderaEngine {
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>> {
        let mut morphemes = Vec::new();

        for mut token in self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| FilterError::analysis(format!("Failed to segment text: {e}")))?
        {
            let surface = token.surface.to_string();
            let (byte_start, byte_end) = (token.byte_start, token.byte_end);
            let unknown = token.word_id.is_unknown();
            let details: Vec<String> = token.details().iter().map(|d| d.to_string()).collect();

            let mut morpheme = Morpheme::new(surface, details).with_offsets(byte_start, byte_end);
            morpheme.unknown = unknown;
            morphemes.push(morpheme);
        }

        Ok(morphemes)
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
