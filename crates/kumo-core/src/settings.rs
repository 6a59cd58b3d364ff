use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spiral {
    Archimedean,
    Rectangular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRule {
    /// Continuous scale across the palette by frequency.
    Frequency,
    /// Fixed palette slot per part-of-speech tag.
    Pos,
    /// Stable ordinal slot per distinct word text.
    Scheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
}

impl AspectRatio {
    /// width : height ratio.
    pub fn ratio(self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Portrait => 3.0 / 4.0,
            AspectRatio::Landscape => 16.0 / 9.0,
        }
    }

    pub fn height_for_width(self, width: f64) -> f64 {
        (width / self.ratio()).floor()
    }
}

pub const MAX_WORDS_RANGE: (u32, u32) = (20, 400);
pub const FONT_SIZE_RANGE: (f64, f64) = (10.0, 160.0);
pub const PADDING_RANGE: (f64, f64) = (0.0, 20.0);

/// Caller-owned layout configuration; read-only to the engine.
///
/// Serialized with camelCase field names so saved projects round-trip with the
/// upstream web client's `WordCloudSettings` JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSettings {
    pub max_words: u32,
    /// `[min, max]` font size in px; `min + 4 <= max`.
    pub font_size_range: [f64; 2],
    pub spiral: Spiral,
    /// Inter-word gap in px.
    pub padding: f64,
    /// Allowed rotation degrees; a random sign is applied at placement time.
    pub rotation_angles: Vec<f64>,
    pub color_scheme_id: String,
    #[serde(default = "default_color_rule")]
    pub color_rule: ColorRule,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: AspectRatio,
}

fn default_color_rule() -> ColorRule {
    ColorRule::Scheme
}

fn default_aspect_ratio() -> AspectRatio {
    AspectRatio::Landscape
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            max_words: 120,
            font_size_range: [18.0, 78.0],
            spiral: Spiral::Archimedean,
            padding: 2.0,
            rotation_angles: vec![-60.0, -30.0, 0.0, 30.0, 60.0],
            color_scheme_id: "vivid".to_string(),
            color_rule: ColorRule::Scheme,
            aspect_ratio: AspectRatio::Landscape,
        }
    }
}

impl CloudSettings {
    /// Clamps every field into its documented range. Out-of-range input is
    /// coerced, not rejected, so older saved projects keep loading.
    pub fn normalized(mut self) -> Self {
        self.max_words = self.max_words.clamp(MAX_WORDS_RANGE.0, MAX_WORDS_RANGE.1);
        let (lo, hi) = FONT_SIZE_RANGE;
        let mut min = self.font_size_range[0].clamp(lo, hi);
        let mut max = self.font_size_range[1].clamp(lo, hi);
        if min + 4.0 > max {
            max = (min + 4.0).min(hi);
            min = max - 4.0;
        }
        self.font_size_range = [min, max];
        self.padding = self.padding.clamp(PADDING_RANGE.0, PADDING_RANGE.1);
        if self.color_scheme_id.trim().is_empty() {
            self.color_scheme_id = "vivid".to_string();
        }
        self
    }
}
