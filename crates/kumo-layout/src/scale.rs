/// Linear domain→range mapping with a degenerate-domain guard.
///
/// When every input word has the same frequency the domain collapses to a
/// point; widening it to `[min, min + 1]` keeps the mapping defined and sends
/// all words to the bottom of the range.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if domain.0 == domain.1 {
            (domain.0, domain.0 + 1.0)
        } else {
            domain
        };
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Normalized position of `value` within the domain, clamped to [0, 1].
    pub fn normalized(&self, value: f64) -> f64 {
        ((value - self.domain.0) / (self.domain.1 - self.domain.0)).clamp(0.0, 1.0)
    }
}

/// Frequency domain `[min(value), max(value)]` over a word run.
pub fn frequency_domain(values: impl IntoIterator<Item = u64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        let v = v as f64;
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    (min, max)
}

/// Scales the configured font range with the canvas area so the same settings
/// read sensibly across preview sizes. Baseline canvas is 800x480; the factor
/// is clamped to [0.6, 2.0].
pub fn viewport_font_range(font_size_range: [f64; 2], width: f64, height: f64) -> (f64, f64) {
    const BASE_AREA: f64 = 800.0 * 480.0;
    let area = (width * height).max(1.0);
    let factor = (area / BASE_AREA).sqrt().clamp(0.6, 2.0);
    (font_size_range[0] * factor, font_size_range[1] * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_linearly_across_the_domain() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(5.0), 150.0);
        assert_eq!(s.map(10.0), 200.0);
    }

    #[test]
    fn degenerate_domain_widens_instead_of_dividing_by_zero() {
        let s = LinearScale::new((7.0, 7.0), (10.0, 20.0));
        assert_eq!(s.map(7.0), 10.0);
        assert_eq!(s.map(8.0), 20.0);
    }

    #[test]
    fn viewport_factor_is_clamped() {
        // Baseline canvas: factor 1.
        assert_eq!(viewport_font_range([18.0, 78.0], 800.0, 480.0), (18.0, 78.0));
        // Tiny canvas floors at 0.6, huge canvas caps at 2.
        let (lo, _) = viewport_font_range([18.0, 78.0], 10.0, 10.0);
        assert!((lo - 18.0 * 0.6).abs() < 1e-9);
        let (_, hi) = viewport_font_range([18.0, 78.0], 8000.0, 4800.0);
        assert!((hi - 78.0 * 2.0).abs() < 1e-9);
    }

    #[test]
    fn frequency_domain_spans_min_to_max() {
        assert_eq!(frequency_domain([3, 9, 1]), (1.0, 9.0));
        assert_eq!(frequency_domain([]), (0.0, 1.0));
    }
}
