use kumo_core::PlacedWord;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// CSS background color; `None` leaves the canvas transparent.
    pub background: Option<String>,
    /// Draws the collision bounding box behind each word (debug aid).
    pub show_bounding_boxes: bool,
    /// Draws the translucent circle behind each word (bubble mode).
    pub show_bubbles: bool,
    pub font_family: String,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            background: None,
            show_bounding_boxes: false,
            show_bubbles: false,
            font_family: "Noto Sans JP, system-ui, sans-serif".to_string(),
        }
    }
}

impl SvgRenderOptions {
    /// Preset matching the bubble-mode preview (circles visible).
    pub fn bubble() -> Self {
        Self {
            show_bubbles: true,
            ..Self::default()
        }
    }
}

/// Renders placed words to a standalone SVG document.
///
/// Each word becomes `<g class="word" transform="translate(x,y)">` with the
/// rotation applied on the inner `<text>`, so bounding boxes and bubble
/// circles share the translation but stay axis-aligned.
pub fn render_svg(
    placed: &[PlacedWord],
    width: f64,
    height: f64,
    options: &SvgRenderOptions,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
        w = fmt(width.max(1.0)),
        h = fmt(height.max(1.0)),
    );
    if let Some(bg) = &options.background {
        let _ = writeln!(
            &mut out,
            r#"<rect width="100%" height="100%" fill="{}" />"#,
            escape_xml(bg)
        );
    }

    for word in placed {
        let _ = write!(
            &mut out,
            r#"<g class="word" transform="translate({},{})">"#,
            fmt(word.x),
            fmt(word.y)
        );
        if options.show_bubbles && word.radius > 0.0 {
            let _ = write!(
                &mut out,
                r#"<circle r="{}" fill="{}" opacity="0.15" />"#,
                fmt(word.radius),
                escape_xml(&word.color)
            );
        }
        if options.show_bounding_boxes {
            let _ = write!(
                &mut out,
                r##"<rect x="{}" y="{}" width="{}" height="{}" fill="rgba(59, 130, 246, 0.12)" stroke="#3b82f6" stroke-width="0.8" />"##,
                fmt(-word.width / 2.0),
                fmt(-word.height / 2.0),
                fmt(word.width),
                fmt(word.height)
            );
        }
        let _ = write!(
            &mut out,
            r#"<text text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}" fill="{}""#,
            escape_xml(&options.font_family),
            fmt(word.font_size),
            escape_xml(&word.color)
        );
        if word.rotate != 0.0 {
            let _ = write!(&mut out, r#" transform="rotate({})""#, fmt(word.rotate));
        }
        let _ = write!(&mut out, ">{}</text>", escape_xml(&word.text));
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

pub(crate) fn fmt(v: f64) -> String {
    // Round-trippable decimal form, avoiding `-0` and tiny float noise from
    // our own calculations.
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
