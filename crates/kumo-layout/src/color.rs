use crate::scale::LinearScale;
use kumo_core::{ColorRule, PosTag, WordFrequency};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub id: &'static str,
    pub colors: &'static [&'static str],
}

/// Built-in palettes; ids and hex values match the upstream client so saved
/// projects keep their look.
pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        id: "vivid",
        colors: &[
            "#ff595e", "#ff924c", "#ffca3a", "#8ac926", "#1982c4", "#6a4c93",
        ],
    },
    ColorScheme {
        id: "sunset",
        colors: &[
            "#182844", "#355070", "#6d597a", "#b56576", "#e56b6f", "#eaac8b",
        ],
    },
    ColorScheme {
        id: "forest",
        colors: &[
            "#0f4c5c", "#2c7a7b", "#52b788", "#b7e4c7", "#d9ed92", "#ffef9f",
        ],
    },
    ColorScheme {
        id: "mono",
        colors: &[
            "#111827", "#1f2937", "#4b5563", "#6b7280", "#9ca3af", "#d1d5db",
        ],
    },
];

pub fn color_scheme(id: &str) -> &'static ColorScheme {
    COLOR_SCHEMES
        .iter()
        .find(|scheme| scheme.id == id)
        .unwrap_or(&COLOR_SCHEMES[0])
}

fn parse_hex(color: &str) -> (f64, f64, f64) {
    let hex = color.trim_start_matches('#');
    let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0) as f64;
    if hex.len() == 6 {
        (parse(&hex[0..2]), parse(&hex[2..4]), parse(&hex[4..6]))
    } else {
        (0.0, 0.0, 0.0)
    }
}

/// Piecewise-linear RGB interpolation at `t` in [0, 1] across palette stops.
fn interpolate_palette(colors: &[&str], t: f64) -> String {
    if colors.len() == 1 {
        return colors[0].to_string();
    }
    let t = t.clamp(0.0, 1.0);
    let span = (colors.len() - 1) as f64;
    let pos = t * span;
    let i = (pos.floor() as usize).min(colors.len() - 2);
    let frac = pos - i as f64;
    let (r0, g0, b0) = parse_hex(colors[i]);
    let (r1, g1, b1) = parse_hex(colors[i + 1]);
    let lerp = |a: f64, b: f64| (a + (b - a) * frac).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(r0, r1),
        lerp(g0, g1),
        lerp(b0, b1)
    )
}

fn pos_slot(pos: Option<&PosTag>) -> usize {
    match pos {
        Some(PosTag::Noun) => 0,
        Some(PosTag::Verb) => 1,
        Some(PosTag::Adjective) => 2,
        Some(PosTag::Adverb) => 3,
        Some(PosTag::Other(_)) | None => 4,
    }
}

/// Per-run color assignment.
///
/// `scheme` hands out stable ordinal slots per distinct word text, `pos` gives
/// each part-of-speech tag a fixed slot, and `frequency` interpolates across
/// the palette by the word's place in the run's frequency domain.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    rule: ColorRule,
    palette: &'static [&'static str],
    value_scale: LinearScale,
    ordinals: HashMap<String, usize>,
}

impl ColorAssigner {
    pub fn new(rule: ColorRule, scheme_id: &str, words: &[WordFrequency]) -> Self {
        let domain = crate::scale::frequency_domain(words.iter().map(|w| w.value));
        Self {
            rule,
            palette: color_scheme(scheme_id).colors,
            value_scale: LinearScale::new(domain, (0.0, 1.0)),
            ordinals: HashMap::new(),
        }
    }

    pub fn color_for(&mut self, word: &WordFrequency) -> String {
        match self.rule {
            ColorRule::Frequency => {
                interpolate_palette(self.palette, self.value_scale.normalized(word.value as f64))
            }
            ColorRule::Pos => self.palette[pos_slot(word.pos.as_ref()) % self.palette.len()]
                .to_string(),
            ColorRule::Scheme => {
                let next = self.ordinals.len();
                let slot = *self.ordinals.entry(word.text.clone()).or_insert(next);
                self.palette[slot % self.palette.len()].to_string()
            }
        }
    }
}
