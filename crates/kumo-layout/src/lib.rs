#![forbid(unsafe_code)]

//! Word-cloud layout engines (headless).
//!
//! Two interchangeable placement strategies behind one entry point:
//! spiral-cloud (outward spiral search with retry-with-shrink and overlap
//! relaxation) and force-bubble (fixed-budget force simulation over circles).
//! Runs are deterministic when [`LayoutOptions::seed`] is pinned.

pub mod bubble;
pub mod cancel;
pub mod cloud;
pub mod color;
pub mod geom;
pub mod rng;
pub mod scale;
pub mod text;

pub use cancel::CancelToken;
pub use color::{COLOR_SCHEMES, ColorScheme, color_scheme};
pub use text::{DeterministicTextMeasurer, TextMeasurer};

use kumo_core::{CloudSettings, PlacedWord, WordFrequency};
use rng::LayoutRng;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cloud,
    Bubble,
}

impl std::str::FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cloud" => Ok(Mode::Cloud),
            "bubble" => Ok(Mode::Bubble),
            _ => Err(()),
        }
    }
}

#[derive(Clone)]
pub struct LayoutOptions {
    /// RNG seed for rotation picks and collision jiggle. `None` seeds from
    /// entropy, which makes cloud layouts intentionally vary across runs.
    pub seed: Option<u64>,
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            seed: None,
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

impl LayoutOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    fn rng(&self) -> LayoutRng {
        match self.seed {
            Some(seed) => LayoutRng::seeded(seed),
            None => LayoutRng::from_entropy(),
        }
    }
}

/// Headless layout entry point.
///
/// The input slice is copied before the engine touches it; caller-owned data
/// is never mutated. Zero or negative canvas dimensions yield an empty
/// result. Cloud mode may drop words it cannot fit; bubble mode returns one
/// placed word per input word.
pub fn layout(
    words: &[WordFrequency],
    width: f64,
    height: f64,
    settings: &CloudSettings,
    mode: Mode,
    options: &LayoutOptions,
) -> Vec<PlacedWord> {
    layout_cancellable(words, width, height, settings, mode, options, None)
        .unwrap_or_default()
}

/// Like [`layout`], but checks `cancel` at phase boundaries and returns
/// `None` instead of committing results once the token trips.
pub fn layout_cancellable(
    words: &[WordFrequency],
    width: f64,
    height: f64,
    settings: &CloudSettings,
    mode: Mode,
    options: &LayoutOptions,
    cancel: Option<&CancelToken>,
) -> Option<Vec<PlacedWord>> {
    // Engines re-read the list across attempts; work on an owned copy so the
    // caller's slice stays untouched.
    let words = words.to_vec();
    let mut rng = options.rng();
    match mode {
        Mode::Cloud => cloud::layout_cloud(
            &words,
            width,
            height,
            settings,
            options.text_measurer.as_ref(),
            &mut rng,
            cancel,
        ),
        Mode::Bubble => bubble::layout_bubble(&words, width, height, settings, &mut rng, cancel),
    }
}
