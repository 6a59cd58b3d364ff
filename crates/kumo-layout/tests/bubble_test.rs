use kumo_core::{CloudSettings, WordFrequency};
use kumo_layout::{LayoutOptions, Mode, layout};

fn words(n: usize) -> Vec<WordFrequency> {
    (0..n)
        .map(|i| WordFrequency::new(format!("word{i}"), (n - i) as u64))
        .collect()
}

#[test]
fn returns_one_placed_word_per_input_word() {
    let settings = CloudSettings::default();
    let options = LayoutOptions::with_seed(7);
    for n in [1, 5, 20, 60] {
        let placed = layout(&words(n), 800.0, 480.0, &settings, Mode::Bubble, &options);
        assert_eq!(placed.len(), n, "bubble mode must never drop words (n={n})");
    }
}

#[test]
fn circles_stay_fully_within_canvas_bounds() {
    let (width, height) = (800.0, 480.0);
    let placed = layout(
        &words(40),
        width,
        height,
        &CloudSettings::default(),
        Mode::Bubble,
        &LayoutOptions::with_seed(11),
    );
    for p in &placed {
        assert!(p.x - p.radius >= 0.0, "{}: x-r = {}", p.text, p.x - p.radius);
        assert!(p.y - p.radius >= 0.0, "{}: y-r = {}", p.text, p.y - p.radius);
        assert!(p.x + p.radius <= width);
        assert!(p.y + p.radius <= height);
    }
}

#[test]
fn pairwise_distance_respects_padding_with_slack() {
    // The 300-tick budget is heuristic, so the contract allows a small
    // residual slack rather than exact separation.
    const EPSILON: f64 = 0.5;
    let settings = CloudSettings::default();
    let placed = layout(
        &words(12),
        800.0,
        480.0,
        &settings,
        Mode::Bubble,
        &LayoutOptions::with_seed(3),
    );
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            let (a, b) = (&placed[i], &placed[j]);
            let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            let min = a.radius + b.radius + settings.padding - EPSILON;
            assert!(
                dist >= min,
                "{} vs {}: dist {dist:.2} < min {min:.2}",
                a.text,
                b.text
            );
        }
    }
}

#[test]
fn single_word_radius_and_position() {
    // fontSizeRange [18,78], canvas 800x480, one word of value 10: radius in
    // [min_dim*0.03, min_dim*0.12], settled near the canvas center.
    let placed = layout(
        &[WordFrequency::new("ことば", 10)],
        800.0,
        480.0,
        &CloudSettings::default(),
        Mode::Bubble,
        &LayoutOptions::with_seed(1),
    );
    assert_eq!(placed.len(), 1);
    let p = &placed[0];
    let min_dim: f64 = 480.0;
    assert!(p.radius >= min_dim * 0.03 - 1e-9);
    assert!(p.radius <= min_dim * 0.12 + 1e-9);
    assert!((p.x - 400.0).abs() < 5.0, "x settled at {}", p.x);
    assert!((p.y - 240.0).abs() < 5.0, "y settled at {}", p.y);
    assert!((p.font_size - p.radius * 0.9).abs() < 1e-9);
    assert_eq!(p.rotate, 0.0);
}

#[test]
fn zero_canvas_short_circuits_to_empty() {
    let options = LayoutOptions::with_seed(1);
    let settings = CloudSettings::default();
    assert!(layout(&words(5), 0.0, 480.0, &settings, Mode::Bubble, &options).is_empty());
    assert!(layout(&words(5), 800.0, -1.0, &settings, Mode::Bubble, &options).is_empty());
    assert!(layout(&[], 800.0, 480.0, &settings, Mode::Bubble, &options).is_empty());
}

#[test]
fn equal_frequencies_all_get_the_minimum_radius() {
    // Degenerate frequency domain widens to [v, v+1]; every word maps to the
    // bottom of the radius range.
    let ws: Vec<WordFrequency> = (0..4)
        .map(|i| WordFrequency::new(format!("w{i}"), 7))
        .collect();
    let placed = layout(
        &ws,
        800.0,
        480.0,
        &CloudSettings::default(),
        Mode::Bubble,
        &LayoutOptions::with_seed(5),
    );
    for p in &placed {
        assert!((p.radius - 480.0 * 0.03).abs() < 1e-9);
    }
}
