use crate::cancel::CancelToken;
use crate::color::ColorAssigner;
use crate::geom::{Bounds, Rect, rotated_extents};
use crate::rng::LayoutRng;
use crate::scale::{LinearScale, frequency_domain, viewport_font_range};
use crate::text::TextMeasurer;
use kumo_core::{CloudSettings, PlacedWord, Spiral, WordFrequency};

/// Placement attempts before giving up on fitting every word; each retry
/// shrinks the font range by `SHRINK_FACTOR`.
const MAX_ATTEMPTS: usize = 5;
const SHRINK_FACTOR: f64 = 0.9;
/// Candidate positions examined along the spiral per word.
const SPIRAL_STEPS: usize = 4096;
/// Upper bound on the fit-pass zoom, so sparse inputs do not blow up.
const MAX_FIT_SCALE: f64 = 5.0;
/// Overlap-relaxation iteration budget.
const RELAX_ITERATIONS: usize = 60;

#[derive(Debug, Clone)]
struct Placement {
    index: usize,
    rect: Rect,
    font_size: f64,
    rotate: f64,
}

/// Candidate offsets walking outward from the canvas center.
enum SpiralIter {
    Archimedean { eccentricity: f64, t: f64 },
    Rectangular { dx: f64, dy: f64, x: f64, y: f64, t: u64 },
}

impl SpiralIter {
    fn new(spiral: Spiral, width: f64, height: f64) -> Self {
        match spiral {
            Spiral::Archimedean => SpiralIter::Archimedean {
                eccentricity: width / height,
                t: 0.0,
            },
            Spiral::Rectangular => {
                let dy = 4.0;
                SpiralIter::Rectangular {
                    dx: dy * width / height,
                    dy,
                    x: 0.0,
                    y: 0.0,
                    t: 0,
                }
            }
        }
    }

    fn next_offset(&mut self) -> (f64, f64) {
        match self {
            SpiralIter::Archimedean { eccentricity, t } => {
                *t += 0.1;
                (*eccentricity * *t * t.cos(), *t * t.sin())
            }
            SpiralIter::Rectangular { dx, dy, x, y, t } => {
                // Expanding rectangle walk: segment lengths 1,1,2,2,3,3,...
                *t += 1;
                let side = ((((1 + 4 * *t) as f64).sqrt() as u64).wrapping_sub(1)) & 3;
                match side {
                    0 => *x += *dx,
                    1 => *y += *dy,
                    2 => *x -= *dx,
                    _ => *y -= *dy,
                }
                (*x, *y)
            }
        }
    }
}

fn attempt_placement(
    words: &[WordFrequency],
    width: f64,
    height: f64,
    settings: &CloudSettings,
    font_range: (f64, f64),
    measurer: &dyn TextMeasurer,
    rng: &mut LayoutRng,
) -> Vec<Placement> {
    let domain = frequency_domain(words.iter().map(|w| w.value));
    let font_scale = LinearScale::new(domain, font_range);

    // Descending size order: bigger words claim central space first.
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by(|&a, &b| words[b].value.cmp(&words[a].value));

    let mut placed: Vec<Placement> = Vec::with_capacity(words.len());
    for index in order {
        let word = &words[index];
        let font_size = font_scale.map(word.value as f64);
        let (raw_w, raw_h) = measurer.measure(&word.text, font_size);
        let rotate = rng.pick_rotation(&settings.rotation_angles);
        let (ext_w, ext_h) = rotated_extents(raw_w, raw_h, rotate);

        let mut spiral = SpiralIter::new(settings.spiral, width, height);
        let mut position = None;
        for _ in 0..SPIRAL_STEPS {
            let (dx, dy) = spiral.next_offset();
            let rect = Rect::new(width / 2.0 + dx, height / 2.0 + dy, ext_w, ext_h);
            if !rect.contained_in_canvas(width, height) {
                continue;
            }
            if placed
                .iter()
                .all(|p| !rect.intersects_padded(&p.rect, settings.padding))
            {
                position = Some(rect);
                break;
            }
        }

        // A word that exhausts the spiral budget is dropped for this attempt.
        if let Some(rect) = position {
            placed.push(Placement {
                index,
                rect,
                font_size,
                rotate,
            });
        }
    }
    placed
}

/// Uniformly rescales and recenters all placements so their tight bounding box
/// fits within the canvas minus a `padding` margin on every side.
fn fit_to_canvas(placed: &mut [Placement], width: f64, height: f64, padding: f64) {
    let mut bounds = Bounds::empty();
    for p in placed.iter() {
        bounds.include_rect(&p.rect);
    }
    if bounds.is_empty() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return;
    }

    let avail_w = (width - 2.0 * padding).max(1.0);
    let avail_h = (height - 2.0 * padding).max(1.0);
    let scale = (avail_w / bounds.width())
        .min(avail_h / bounds.height())
        .min(MAX_FIT_SCALE);
    let (bcx, bcy) = bounds.center();

    for p in placed.iter_mut() {
        p.rect.cx = width / 2.0 + (p.rect.cx - bcx) * scale;
        p.rect.cy = height / 2.0 + (p.rect.cy - bcy) * scale;
        p.rect.half_w *= scale;
        p.rect.half_h *= scale;
        p.font_size *= scale;
    }
}

/// Iteratively separates residual overlaps left behind by the fit pass.
///
/// Each overlapping pair moves apart along its minimum-overlap axis, split
/// inversely by font size so large words barely move. While any overlap
/// remains, every word is also drawn slightly toward the canvas center and
/// clamped inside the canvas. Stops early once an iteration finds no overlap.
fn relax_overlaps(placed: &mut [Placement], width: f64, height: f64, padding: f64) {
    let max_font = placed
        .iter()
        .map(|p| p.font_size)
        .fold(f64::MIN, f64::max)
        .max(1.0);

    for _ in 0..RELAX_ITERATIONS {
        let mut any_overlap = false;
        for i in 0..placed.len() {
            for j in (i + 1)..placed.len() {
                if !placed[i].rect.intersects_padded(&placed[j].rect, padding) {
                    continue;
                }
                any_overlap = true;
                let (ox, oy) = placed[i].rect.overlap(&placed[j].rect);
                let (ox, oy) = (ox + padding, oy + padding);

                let share_i = placed[j].font_size / (placed[i].font_size + placed[j].font_size);
                let share_j = 1.0 - share_i;

                if ox < oy {
                    let dir = if placed[i].rect.cx <= placed[j].rect.cx {
                        -1.0
                    } else {
                        1.0
                    };
                    placed[i].rect.cx += dir * ox * share_i;
                    placed[j].rect.cx -= dir * ox * share_j;
                } else {
                    let dir = if placed[i].rect.cy <= placed[j].rect.cy {
                        -1.0
                    } else {
                        1.0
                    };
                    placed[i].rect.cy += dir * oy * share_i;
                    placed[j].rect.cy -= dir * oy * share_j;
                }
            }
        }

        if !any_overlap {
            break;
        }

        for p in placed.iter_mut() {
            let pull = 0.01 * (p.font_size / max_font);
            p.rect.cx += (width / 2.0 - p.rect.cx) * pull;
            p.rect.cy += (height / 2.0 - p.rect.cy) * pull;
            let (cx, cy) = p.rect.clamped_center(width, height);
            p.rect.cx = cx;
            p.rect.cy = cy;
        }
    }
}

pub(crate) fn layout_cloud(
    words: &[WordFrequency],
    width: f64,
    height: f64,
    settings: &CloudSettings,
    measurer: &dyn TextMeasurer,
    rng: &mut LayoutRng,
    cancel: Option<&CancelToken>,
) -> Option<Vec<PlacedWord>> {
    if words.is_empty() || width <= 0.0 || height <= 0.0 {
        return Some(Vec::new());
    }

    let mut font_range = viewport_font_range(settings.font_size_range, width, height);
    let mut placed = Vec::new();
    for attempt in 0..MAX_ATTEMPTS {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                return None;
            }
        }
        placed = attempt_placement(words, width, height, settings, font_range, measurer, rng);
        tracing::debug!(
            attempt,
            placed = placed.len(),
            total = words.len(),
            "cloud placement attempt"
        );
        if placed.len() == words.len() {
            break;
        }
        font_range = (font_range.0 * SHRINK_FACTOR, font_range.1 * SHRINK_FACTOR);
    }

    fit_to_canvas(&mut placed, width, height, settings.padding);
    relax_overlaps(&mut placed, width, height, settings.padding);

    if let Some(token) = cancel {
        if token.is_cancelled() {
            return None;
        }
    }

    let mut assigner = ColorAssigner::new(settings.color_rule, &settings.color_scheme_id, words);
    let colors: Vec<String> = words.iter().map(|w| assigner.color_for(w)).collect();

    // Output follows input rank order regardless of placement order.
    placed.sort_by_key(|p| p.index);
    Some(
        placed
            .into_iter()
            .map(|p| {
                let word = &words[p.index];
                PlacedWord {
                    text: word.text.clone(),
                    value: word.value,
                    x: p.rect.cx,
                    y: p.rect.cy,
                    font_size: p.font_size,
                    rotate: p.rotate,
                    width: p.rect.width(),
                    height: p.rect.height(),
                    radius: p.font_size * 0.6,
                    color: colors[p.index].clone(),
                    pos: word.pos.clone(),
                }
            })
            .collect(),
    )
}
