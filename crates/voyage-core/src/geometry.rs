//! Viewport geometry for intersection tests

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grows the rectangle by `margin` on every edge
    pub fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Overlapping area, `None` if the rectangles do not touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Share of `target` inside `root` grown by `margin`.
///
/// `None` when they do not touch. A zero-area target that touches counts
/// as fully visible.
pub fn intersection_ratio(target: &Rect, root: &Rect, margin: f64) -> Option<f64> {
    let overlap = target.intersection(&root.expand(margin))?;
    let area = target.area();
    if area <= 0.0 {
        return Some(1.0);
    }
    Some(overlap.area() / area)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_disjoint_rects() {
        let below = Rect::new(0.0, 900.0, 1000.0, 400.0);
        assert_eq!(VIEWPORT.intersection(&below), None);
        assert_eq!(intersection_ratio(&below, &VIEWPORT, 0.0), None);
    }

    #[test]
    fn test_partial_overlap_ratio() {
        // 40px of a 400px section is on screen
        let section = Rect::new(0.0, 760.0, 1000.0, 400.0);
        let ratio = intersection_ratio(&section, &VIEWPORT, 0.0).unwrap();
        assert!((ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_margin_extends_root() {
        let section = Rect::new(0.0, 849.0, 1000.0, 100.0);
        assert_eq!(intersection_ratio(&section, &VIEWPORT, 0.0), None);
        let ratio = intersection_ratio(&section, &VIEWPORT, 50.0).unwrap();
        assert!(ratio > 0.0);
    }

    #[test]
    fn test_zero_area_target() {
        let line = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&line, &VIEWPORT, 0.0), Some(1.0));
    }

    #[test]
    fn test_expand_and_translate() {
        let grown = VIEWPORT.expand(50.0);
        assert_eq!(grown, Rect::new(-50.0, -50.0, 1100.0, 900.0));
        assert_eq!(VIEWPORT.translate(0.0, 300.0).bottom(), 1100.0);
    }
}
