/// Axis-aligned rectangle stored as center plus half extents.
///
/// Cloud-mode collision checks and canvas clamping all work on this shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub cx: f64,
    pub cy: f64,
    pub half_w: f64,
    pub half_h: f64,
}

impl Rect {
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            cx,
            cy,
            half_w: width / 2.0,
            half_h: height / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.half_w * 2.0
    }

    pub fn height(&self) -> f64 {
        self.half_h * 2.0
    }

    /// True when the two rectangles, each expanded by `gap / 2`, intersect.
    pub fn intersects_padded(&self, other: &Rect, gap: f64) -> bool {
        let dx = (self.cx - other.cx).abs();
        let dy = (self.cy - other.cy).abs();
        dx < self.half_w + other.half_w + gap && dy < self.half_h + other.half_h + gap
    }

    /// Overlap depth along each axis; both positive iff the rects intersect.
    pub fn overlap(&self, other: &Rect) -> (f64, f64) {
        let ox = self.half_w + other.half_w - (self.cx - other.cx).abs();
        let oy = self.half_h + other.half_h - (self.cy - other.cy).abs();
        (ox, oy)
    }

    pub fn contained_in_canvas(&self, width: f64, height: f64) -> bool {
        self.cx - self.half_w >= 0.0
            && self.cy - self.half_h >= 0.0
            && self.cx + self.half_w <= width
            && self.cy + self.half_h <= height
    }

    /// Moves the center so the rect lies fully inside the canvas. Rects larger
    /// than the canvas end up centered on the overflowing axis.
    pub fn clamped_center(&self, width: f64, height: f64) -> (f64, f64) {
        let cx = if self.half_w * 2.0 >= width {
            width / 2.0
        } else {
            self.cx.clamp(self.half_w, width - self.half_w)
        };
        let cy = if self.half_h * 2.0 >= height {
            height / 2.0
        } else {
            self.cy.clamp(self.half_h, height - self.half_h)
        };
        (cx, cy)
    }
}

/// Running bounds accumulator for the fit pass.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn include_rect(&mut self, rect: &Rect) {
        self.min_x = self.min_x.min(rect.cx - rect.half_w);
        self.min_y = self.min_y.min(rect.cy - rect.half_h);
        self.max_x = self.max_x.max(rect.cx + rect.half_w);
        self.max_y = self.max_y.max(rect.cy + rect.half_h);
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Axis-aligned bounding box of a `width x height` footprint rotated by
/// `degrees`.
///
/// 0° and ±90° are exact (the ±90° case swaps the extents). Other angles keep
/// the unrotated footprint as a conservative stand-in; see the module tests
/// for the accepted error this introduces.
pub fn rotated_extents(width: f64, height: f64, degrees: f64) -> (f64, f64) {
    let quarter = degrees.rem_euclid(180.0);
    if (quarter - 90.0).abs() < 1e-9 {
        (height, width)
    } else {
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_intersection_respects_the_gap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(12.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects_padded(&b, 0.0));
        assert!(a.intersects_padded(&b, 3.0));
    }

    #[test]
    fn rotated_extents_swap_at_quarter_turns() {
        assert_eq!(rotated_extents(40.0, 10.0, 0.0), (40.0, 10.0));
        assert_eq!(rotated_extents(40.0, 10.0, 90.0), (10.0, 40.0));
        assert_eq!(rotated_extents(40.0, 10.0, -90.0), (10.0, 40.0));
        assert_eq!(rotated_extents(40.0, 10.0, 270.0), (10.0, 40.0));
        // Non-axis angles keep the unrotated footprint (accepted approximation).
        assert_eq!(rotated_extents(40.0, 10.0, 30.0), (40.0, 10.0));
    }

    #[test]
    fn clamped_center_keeps_rects_inside() {
        let r = Rect::new(-5.0, 1000.0, 20.0, 20.0);
        let (cx, cy) = r.clamped_center(100.0, 100.0);
        assert_eq!((cx, cy), (10.0, 90.0));

        // Oversized rects center on the overflowing axis.
        let big = Rect::new(0.0, 0.0, 300.0, 10.0);
        let (cx, _) = big.clamped_center(100.0, 100.0);
        assert_eq!(cx, 50.0);
    }

    #[test]
    fn bounds_accumulate_rect_extents() {
        let mut b = Bounds::empty();
        assert!(b.is_empty());
        b.include_rect(&Rect::new(10.0, 10.0, 20.0, 10.0));
        b.include_rect(&Rect::new(50.0, 30.0, 10.0, 10.0));
        assert_eq!(b.width(), 55.0);
        assert_eq!(b.height(), 30.0);
        assert_eq!(b.center(), (27.5, 20.0));
    }
}
