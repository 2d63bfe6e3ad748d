//! Rectangle math shared by nodes, anchors and connection handles.
//!
//! Points are plain `(x, y)` tuples in canvas coordinates. Pointer positions
//! arrive as [`slint::LogicalPosition`] and are converted with [`point`].

use slint::LogicalPosition;

/// Convert a Slint logical position into a canvas point.
pub fn point(position: LogicalPosition) -> (f32, f32) {
    (position.x, position.y)
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `2 * half_extent` centered on `center`.
    pub fn centered_square(center: (f32, f32), half_extent: f32) -> Self {
        Self::new(
            center.0 - half_extent,
            center.1 - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Same position, size multiplied by `factor`.
    ///
    /// Callers must pass the *base* rect here; scaling an already-scaled
    /// rect compounds rounding error across zoom steps.
    pub fn scaled_from(base: &Rect, factor: f32) -> Self {
        Self::new(base.x, base.y, base.width * factor, base.height * factor)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Containment with all four edges counted as inside.
    ///
    /// Used for node bodies, where a click on the border should still grab
    /// the node.
    pub fn contains_inclusive(&self, p: (f32, f32)) -> bool {
        p.0 >= self.x
            && p.0 <= self.x + self.width
            && p.1 >= self.y
            && p.1 <= self.y + self.height
    }

    /// Half-open containment: left/top edges inside, right/bottom edges outside.
    ///
    /// Used for anchors and handles, which are small and sit on node edges.
    pub fn contains_exact(&self, p: (f32, f32)) -> bool {
        p.0 >= self.x && p.0 < self.x + self.width && p.1 >= self.y && p.1 < self.y + self.height
    }
}

/// Midpoint between two points.
pub fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) * 0.5, (a.1 + b.1) * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), (60.0, 45.0));
    }

    #[test]
    fn test_inclusive_counts_far_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_inclusive((10.0, 10.0)));
        assert!(r.contains_inclusive((0.0, 0.0)));
        assert!(!r.contains_inclusive((10.1, 5.0)));
    }

    #[test]
    fn test_exact_excludes_far_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_exact((0.0, 0.0)));
        assert!(r.contains_exact((9.99, 9.99)));
        assert!(!r.contains_exact((10.0, 5.0)));
        assert!(!r.contains_exact((5.0, 10.0)));
    }

    #[test]
    fn test_scaled_keeps_position() {
        let base = Rect::new(5.0, 7.0, 40.0, 20.0);
        let scaled = Rect::scaled_from(&base, 2.5);
        assert_eq!(scaled.position(), (5.0, 7.0));
        assert_eq!(scaled.size(), (100.0, 50.0));
    }

    #[test]
    fn test_centered_square() {
        let r = Rect::centered_square((50.0, 50.0), 8.0);
        assert_eq!(r, Rect::new(42.0, 42.0, 16.0, 16.0));
        assert_eq!(r.center(), (50.0, 50.0));
    }

    #[test]
    fn test_point_from_logical_position() {
        assert_eq!(point(LogicalPosition::new(3.0, 4.0)), (3.0, 4.0));
    }
}
