use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag attached by dictionary-based segmentation.
///
/// The dictionary pipeline only keeps content words (noun/verb/adjective/adverb);
/// `Other` survives serialization so foreign tag sets round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    #[serde(untagged)]
    Other(String),
}

impl PosTag {
    pub fn is_content_word(&self) -> bool {
        !matches!(self, PosTag::Other(_))
    }
}

/// One ranked word produced by frequency extraction.
///
/// Instances are produced fresh per run and never mutated; ordering by `value`
/// descending determines placement priority in the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub text: String,
    pub value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PosTag>,
}

impl WordFrequency {
    pub fn new(text: impl Into<String>, value: u64) -> Self {
        Self {
            text: text.into(),
            value,
            pos: None,
        }
    }

    pub fn with_pos(mut self, pos: PosTag) -> Self {
        self.pos = Some(pos);
        self
    }
}

/// A word the layout engine committed to the canvas.
///
/// `x`/`y` are center coordinates in canvas space. `width`/`height` are the
/// axis-aligned bounding box of the rotated glyph footprint. `radius` is the
/// bubble-mode circle radius; cloud mode fills in a nominal value derived
/// from the font size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub text: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub rotate: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PosTag>,
}
