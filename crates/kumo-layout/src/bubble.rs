use crate::cancel::CancelToken;
use crate::color::ColorAssigner;
use crate::rng::LayoutRng;
use crate::scale::{LinearScale, frequency_domain};
use kumo_core::{CloudSettings, PlacedWord, WordFrequency};

/// Fixed simulation budget. Empirically sufficient for the collision forces
/// to separate every circle; a heuristic bound, not a convergence proof.
const TICKS: usize = 300;
/// Strength of the x/y attraction toward the canvas center.
const CENTER_STRENGTH: f64 = 0.05;
/// Velocity carry-over per tick (1 - velocity decay of 0.4).
const VELOCITY_RETENTION: f64 = 0.6;
/// Radius range as fractions of the smaller canvas dimension.
const RADIUS_MIN_FRACTION: f64 = 0.03;
const RADIUS_MAX_FRACTION: f64 = 0.12;
/// Extra slack added to the collision distance beyond the configured padding.
const COLLIDE_SLACK: f64 = 2.0;
/// Cancellation checks happen between batches of this many ticks.
const TICK_BATCH: usize = 50;

struct BubbleNode {
    radius: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

fn collide_pass(nodes: &mut [BubbleNode], min_gap: f64, rng: &mut LayoutRng) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let min_dist = nodes[i].radius + nodes[j].radius + min_gap;
            let mut dx = (nodes[i].x + nodes[i].vx) - (nodes[j].x + nodes[j].vx);
            let mut dy = (nodes[i].y + nodes[i].vy) - (nodes[j].y + nodes[j].vy);
            let mut dist_sq = dx * dx + dy * dy;
            if dist_sq >= min_dist * min_dist {
                continue;
            }
            if dist_sq == 0.0 {
                dx = rng.jiggle();
                dy = rng.jiggle();
                dist_sq = dx * dx + dy * dy;
            }
            let dist = dist_sq.sqrt();
            let push = (min_dist - dist) / dist;
            let px = dx * push;
            let py = dy * push;
            // Heavier (larger) circles absorb less of the correction.
            let ri = nodes[i].radius * nodes[i].radius;
            let rj = nodes[j].radius * nodes[j].radius;
            let share_i = rj / (ri + rj);
            nodes[i].vx += px * share_i;
            nodes[i].vy += py * share_i;
            nodes[j].vx -= px * (1.0 - share_i);
            nodes[j].vy -= py * (1.0 - share_i);
        }
    }
}

/// Force-directed circle packing: weak attraction toward the canvas center
/// plus pairwise collision avoidance, run for a fixed number of ticks.
///
/// Unlike cloud mode this never drops a word; every input word comes back as
/// one placed circle, clamped fully inside the canvas.
pub(crate) fn layout_bubble(
    words: &[WordFrequency],
    width: f64,
    height: f64,
    settings: &CloudSettings,
    rng: &mut LayoutRng,
    cancel: Option<&CancelToken>,
) -> Option<Vec<PlacedWord>> {
    if words.is_empty() || width <= 0.0 || height <= 0.0 {
        return Some(Vec::new());
    }

    let min_dim = width.min(height);
    let radius_scale = LinearScale::new(
        frequency_domain(words.iter().map(|w| w.value)),
        (min_dim * RADIUS_MIN_FRACTION, min_dim * RADIUS_MAX_FRACTION),
    );

    let center = (width / 2.0, height / 2.0);
    let mut nodes: Vec<BubbleNode> = words
        .iter()
        .map(|word| BubbleNode {
            radius: radius_scale.map(word.value as f64),
            x: center.0,
            y: center.1,
            vx: 0.0,
            vy: 0.0,
        })
        .collect();

    let min_gap = settings.padding + COLLIDE_SLACK;
    // d3-force alpha schedule: decay toward zero over the tick budget.
    let alpha_decay = 1.0 - 0.001_f64.powf(1.0 / TICKS as f64);
    let mut alpha = 1.0;

    let mut ticks_done = 0;
    while ticks_done < TICKS {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                return None;
            }
        }
        for _ in 0..TICK_BATCH.min(TICKS - ticks_done) {
            alpha += (0.0 - alpha) * alpha_decay;
            for node in nodes.iter_mut() {
                node.vx += (center.0 - node.x) * CENTER_STRENGTH * alpha;
                node.vy += (center.1 - node.y) * CENTER_STRENGTH * alpha;
            }
            collide_pass(&mut nodes, min_gap, rng);
            for node in nodes.iter_mut() {
                node.vx *= VELOCITY_RETENTION;
                node.vy *= VELOCITY_RETENTION;
                node.x += node.vx;
                node.y += node.vy;
            }
        }
        ticks_done += TICK_BATCH;
    }

    let mut assigner = ColorAssigner::new(settings.color_rule, &settings.color_scheme_id, words);
    Some(
        words
            .iter()
            .zip(nodes)
            .map(|(word, node)| {
                let r = node.radius;
                // Keep the full circle inside the canvas.
                let x = node.x.clamp(r, (width - r).max(r));
                let y = node.y.clamp(r, (height - r).max(r));
                PlacedWord {
                    text: word.text.clone(),
                    value: word.value,
                    x,
                    y,
                    font_size: r * 0.9,
                    rotate: 0.0,
                    width: r * 2.0,
                    height: r * 2.0,
                    radius: r,
                    color: assigner.color_for(word),
                    pos: word.pos.clone(),
                }
            })
            .collect(),
    )
}
