//! Morphological engine boundary.
//!
//! An engine turns text into raw [`Morpheme`]s carrying the IPADIC feature
//! vector. Dictionary loading and lattice search live behind
//! [`MorphologicalEngine`]; tokenizer backends only normalize its output.
//!
//! IPADIC feature layout:
//!
//! ```text
//! index  0     1     2     3     4          5          6          7        8
//!        pos1  pos2  pos3  pos4  conj_type  conj_form  base_form  reading  pronunciation
//! ```
//!
//! `*` marks an absent slot.

use crate::error::Result;

pub mod lindera;

pub use lindera::LinderaEngine;

/// Number of part-of-speech slots in an IPADIC feature vector.
pub const PART_OF_SPEECH_SLOTS: usize = 4;

/// Feature index of the base form.
pub const BASE_FORM_INDEX: usize = 6;

/// Feature index of the reading.
pub const READING_INDEX: usize = 7;

/// Marker for an absent feature.
const ABSENT: &str = "*";

/// A morpheme as reported by an engine, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface text
    pub surface: String,
    /// Byte offset where the morpheme starts
    pub byte_start: usize,
    /// Byte offset where the morpheme ends
    pub byte_end: usize,
    /// Raw feature vector
    pub details: Vec<String>,
    /// Whether the engine did not find this morpheme in its dictionaries
    pub unknown: bool,
}

impl Morpheme {
    /// Create a known morpheme with the given features.
    pub fn new<S, I, D>(surface: S, details: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        let surface = surface.into();
        Morpheme {
            byte_end: surface.len(),
            surface,
            byte_start: 0,
            details: details.into_iter().map(Into::into).collect(),
            unknown: false,
        }
    }

    /// Set the byte offsets.
    pub fn with_offsets(mut self, byte_start: usize, byte_end: usize) -> Self {
        self.byte_start = byte_start;
        self.byte_end = byte_end;
        self
    }

    /// Mark this morpheme as unknown to the dictionary.
    pub fn unknown(mut self) -> Self {
        self.unknown = true;
        self
    }

    /// Get a feature by index, `None` if missing, empty or `*`.
    pub fn feature(&self, index: usize) -> Option<&str> {
        self.details
            .get(index)
            .map(String::as_str)
            .filter(|f| !f.is_empty() && *f != ABSENT)
    }

    /// Present part-of-speech slots, coarsest first.
    pub fn part_of_speech(&self) -> Vec<String> {
        (0..PART_OF_SPEECH_SLOTS)
            .map_while(|i| self.feature(i))
            .map(String::from)
            .collect()
    }

    /// The base form, if the dictionary provides one.
    pub fn base_form(&self) -> Option<&str> {
        self.feature(BASE_FORM_INDEX)
    }

    /// The reading, if the dictionary provides one.
    pub fn reading(&self) -> Option<&str> {
        self.feature(READING_INDEX)
    }
}

/// A morphological analyzer used as a black box: text in, morphemes out.
///
/// Engines are built once per stream. Implementations must be pure with
/// respect to the input text; a failing call aborts the stream.
pub trait MorphologicalEngine: Send + Sync {
    /// Segment text into morphemes in input order.
    fn segment(&self, text: &str) -> Result<Vec<Morpheme>>;

    /// Get the name of this engine (for logging).
    fn name(&self) -> &'static str;
}
