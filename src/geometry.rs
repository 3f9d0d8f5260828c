//! Axis-aligned rectangle math for positions and collision.

use glam::Vec2;

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// The right and bottom edges are exclusive, so two rectangles that merely
/// touch do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Builds a rectangle of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Half-open overlap test: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Returns a copy moved the minimal distance to lie inside `bounds`.
    ///
    /// Assumes `self` fits within `bounds`, which holds for every entity
    /// against the stage.
    pub fn clamp_within(&self, bounds: &Rect) -> Rect {
        let mut clamped = *self;
        if clamped.left() < bounds.left() {
            clamped.pos.x = bounds.left();
        } else if clamped.right() > bounds.right() {
            clamped.pos.x = bounds.right() - clamped.size.x;
        }
        if clamped.top() < bounds.top() {
            clamped.pos.y = bounds.top();
        } else if clamped.bottom() > bounds.bottom() {
            clamped.pos.y = bounds.bottom() - clamped.size.y;
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_center_round_trips() {
        let rect = Rect::from_center(Vec2::new(50.0, 40.0), Vec2::new(24.0, 16.0));
        assert_eq!(rect.pos, Vec2::new(38.0, 32.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_clamp_pushes_back_inside() {
        let bounds = Rect::new(0.0, 0.0, 600.0, 580.0);
        let off_left = Rect::new(-5.0, 10.0, 24.0, 16.0);
        assert_eq!(off_left.clamp_within(&bounds).pos, Vec2::new(0.0, 10.0));

        let off_right = Rect::new(590.0, 10.0, 24.0, 16.0);
        assert_eq!(off_right.clamp_within(&bounds).pos, Vec2::new(576.0, 10.0));
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let bounds = Rect::new(0.0, 0.0, 600.0, 580.0);
        let rect = Rect::new(100.0, 100.0, 24.0, 16.0);
        assert_eq!(rect.clamp_within(&bounds), rect);
    }
}
