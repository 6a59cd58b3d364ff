#![forbid(unsafe_code)]

//! `kumo` is a headless word-cloud generator for Japanese (and mixed) text.
//!
//! The pipeline is: raw text → [`compute_word_frequencies`] → ranked words →
//! layout engine (spiral cloud or force bubble) → placed words → SVG/raster.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`kumo::render`)
//! - `raster`: enable PNG/JPG output via pure-Rust SVG rasterization

pub use kumo_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use kumo_layout::{
        CancelToken, DeterministicTextMeasurer, LayoutOptions, Mode, TextMeasurer, layout,
        layout_cancellable,
    };
    pub use kumo_render::{SvgRenderOptions, export_csv, render_svg};

    #[cfg(feature = "raster")]
    pub mod raster;

    use kumo_core::{
        CloudSettings, DelimiterSegmenter, DictionarySegmenter, FrequencyOptions, PlacedWord,
        ProjectData, Segmenter, StopwordSet, WordFrequency, compute_word_frequencies,
        parse_stopwords,
    };
    use std::sync::Arc;

    /// Convenience bundle for headless generation: settings, segmentation
    /// strategy and layout options in one place, so callers do not thread
    /// four parameters through every call.
    ///
    /// All work is CPU-bound and synchronous; no I/O happens outside the
    /// optional dictionary load.
    #[derive(Clone)]
    pub struct HeadlessCloud {
        pub settings: CloudSettings,
        pub layout_options: LayoutOptions,
        pub min_token_length: usize,
        segmenter: Arc<dyn Segmenter + Send + Sync>,
    }

    impl Default for HeadlessCloud {
        fn default() -> Self {
            Self {
                settings: CloudSettings::default(),
                layout_options: LayoutOptions::default(),
                min_token_length: 2,
                segmenter: Arc::new(DelimiterSegmenter),
            }
        }
    }

    impl HeadlessCloud {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_settings(mut self, settings: CloudSettings) -> Self {
            self.settings = settings.normalized();
            self
        }

        pub fn with_seed(mut self, seed: u64) -> Self {
            self.layout_options.seed = Some(seed);
            self
        }

        pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter + Send + Sync>) -> Self {
            self.segmenter = segmenter;
            self
        }

        /// Switches to dictionary-based segmentation backed by a TSV lexicon.
        ///
        /// Fails with [`kumo_core::Error::DictionaryUnavailable`] when the
        /// file is missing or empty; callers surface that as a loading state
        /// rather than a hard failure.
        pub fn with_dictionary_path(mut self, path: &std::path::Path) -> kumo_core::Result<Self> {
            self.segmenter = Arc::new(DictionarySegmenter::from_path(path)?);
            Ok(self)
        }

        /// Derives the canvas height for a given width from the configured
        /// aspect ratio.
        pub fn canvas_height(&self, width: f64) -> f64 {
            self.settings.aspect_ratio.height_for_width(width)
        }

        pub fn stopword_set(&self, stopwords_text: &str) -> StopwordSet {
            parse_stopwords(stopwords_text)
        }

        pub fn frequencies(&self, text: &str, stopwords_text: &str) -> Vec<WordFrequency> {
            let stopwords = self.stopword_set(stopwords_text);
            compute_word_frequencies(
                text,
                &stopwords,
                self.segmenter.as_ref(),
                &FrequencyOptions {
                    max_words: self.settings.max_words as usize,
                    min_token_length: self.min_token_length,
                },
            )
        }

        pub fn layout_words(
            &self,
            words: &[WordFrequency],
            width: f64,
            height: f64,
            mode: Mode,
        ) -> Vec<PlacedWord> {
            layout(words, width, height, &self.settings, mode, &self.layout_options)
        }

        /// Full pipeline: frequencies, then layout at the configured aspect
        /// ratio.
        pub fn generate(
            &self,
            text: &str,
            stopwords_text: &str,
            width: f64,
            mode: Mode,
        ) -> Vec<PlacedWord> {
            let words = self.frequencies(text, stopwords_text);
            self.layout_words(&words, width, self.canvas_height(width), mode)
        }

        pub fn render_svg(
            &self,
            text: &str,
            stopwords_text: &str,
            width: f64,
            mode: Mode,
            svg_options: &SvgRenderOptions,
        ) -> String {
            let placed = self.generate(text, stopwords_text, width, mode);
            render_svg(&placed, width, self.canvas_height(width), svg_options)
        }

        pub fn export_csv(&self, text: &str, stopwords_text: &str) -> String {
            export_csv(&self.frequencies(text, stopwords_text))
        }

        /// Bundles the raw inputs into the persisted project payload.
        pub fn to_project_data(&self, text: &str, stopwords_text: &str) -> ProjectData {
            ProjectData {
                text: text.to_string(),
                stopwords_text: stopwords_text.to_string(),
                settings: self.settings.clone(),
            }
        }

        /// Restores settings from a loaded project; text and stopword text
        /// stay caller-owned.
        pub fn apply_project_data(&mut self, data: &ProjectData) {
            self.settings = data.settings.clone().normalized();
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        const SAMPLE: &str = "青空 青空 青空 公園 公園 散歩";

        #[test]
        fn frequencies_rank_by_count() {
            let cloud = HeadlessCloud::new();
            let words = cloud.frequencies(SAMPLE, "");
            assert_eq!(words[0].text, "青空");
            assert_eq!(words[0].value, 3);
            assert_eq!(words[1].text, "公園");
        }

        #[test]
        fn stopwords_remove_words_before_layout() {
            let cloud = HeadlessCloud::new();
            let words = cloud.frequencies(SAMPLE, "公園");
            assert!(words.iter().all(|w| w.text != "公園"));
        }

        #[test]
        fn generate_uses_aspect_ratio_height() {
            let cloud = HeadlessCloud::new().with_seed(7);
            let height = cloud.canvas_height(1600.0);
            assert!((height - 900.0).abs() < 1e-9);
            let placed = cloud.generate(SAMPLE, "", 1600.0, Mode::Bubble);
            assert_eq!(placed.len(), 3);
            for word in &placed {
                assert!(word.y >= 0.0 && word.y <= height);
            }
        }

        #[test]
        fn render_svg_emits_every_word() {
            let cloud = HeadlessCloud::new().with_seed(7);
            let svg = cloud.render_svg(SAMPLE, "", 800.0, Mode::Bubble, &SvgRenderOptions::bubble());
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains("青空"));
            assert!(svg.contains("<circle"));
        }

        #[test]
        fn csv_export_is_ranked() {
            let cloud = HeadlessCloud::new();
            let csv = cloud.export_csv(SAMPLE, "");
            let mut lines = csv.lines();
            assert_eq!(lines.next(), Some("word,frequency,pos"));
            assert!(lines.next().unwrap().starts_with("\"青空\",3"));
        }

        #[test]
        fn project_round_trip_restores_settings() {
            let mut settings = CloudSettings::default();
            settings.max_words = 40;
            let cloud = HeadlessCloud::new().with_settings(settings);
            let data = cloud.to_project_data(SAMPLE, "公園");
            let json = serde_json::to_string(&data).unwrap();
            let restored: ProjectData = serde_json::from_str(&json).unwrap();

            let mut other = HeadlessCloud::new();
            other.apply_project_data(&restored);
            assert_eq!(other.settings.max_words, 40);
            assert_eq!(restored.text, SAMPLE);
            assert_eq!(restored.stopwords_text, "公園");
        }
    }
}
