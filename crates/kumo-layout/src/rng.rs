use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable random source for the layout engine.
///
/// Rotation picks and collision jiggle are the only randomized decisions;
/// pinning the seed makes a whole layout run reproducible.
#[derive(Debug, Clone)]
pub struct LayoutRng {
    inner: SmallRng,
}

impl LayoutRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: SmallRng::from_entropy(),
        }
    }

    /// Uniform in [0, 1).
    pub fn unit(&mut self) -> f64 {
        self.inner.r#gen::<f64>()
    }

    /// Picks one of the allowed angles and applies a random sign.
    pub fn pick_rotation(&mut self, angles: &[f64]) -> f64 {
        if angles.is_empty() {
            return 0.0;
        }
        let index = self.inner.gen_range(0..angles.len());
        let angle = angles[index];
        if angle != 0.0 && self.inner.gen_bool(0.5) {
            -angle
        } else {
            angle
        }
    }

    /// Tiny displacement used to break exactly-coincident positions apart,
    /// mirroring d3-force's `jiggle()`.
    pub fn jiggle(&mut self) -> f64 {
        (self.unit() - 0.5) * 1e-6
    }
}
