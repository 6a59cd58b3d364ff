#![forbid(unsafe_code)]

//! Tokenizer, frequency extraction and data model for the kumo word-cloud
//! engine (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (no hidden randomness in ranking)
//! - width-insensitive Japanese text handling (NFKC + lowercase)
//! - collaborator boundaries (project storage, segmentation dictionaries)
//!   expressed as traits, no transport code

pub mod error;
pub mod frequency;
pub mod model;
pub mod project;
pub mod segment;
pub mod settings;
pub mod stopwords;

pub use error::{Error, Result};
pub use frequency::{FrequencyOptions, compute_word_frequencies, normalize_token};
pub use model::{PlacedWord, PosTag, WordFrequency};
pub use project::{
    CreateProjectPayload, MemoryProjectStore, ProjectData, ProjectMeta, ProjectStore,
    UpdateProjectPayload,
};
pub use segment::{DelimiterSegmenter, DictionarySegmenter, Segmenter, Token};
pub use settings::{AspectRatio, CloudSettings, ColorRule, Spiral};
pub use stopwords::{DEFAULT_JA_STOPWORDS, StopwordSet, parse_stopwords};

#[cfg(test)]
mod tests;
