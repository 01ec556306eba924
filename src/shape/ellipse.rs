use std::f64::consts::SQRT_2;

use super::NamedPointError;
use crate::geometry::{Domain, Point};

/// An axis-aligned ellipse given by its center and semi-axes `a >= b >= 0`.
///
/// The squared semi-axes are precomputed so the per-pixel containment test
/// is a couple of multiplications.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point,
    a: f64,
    b: f64,
    a2: f64,
    b2: f64,
}

impl Ellipse {
    pub fn new(center: Point, a: f64, b: f64) -> Self {
        debug_assert!(a >= b && b >= 0.0);

        Self { center, a, b, a2: a * a, b2: b * b }
    }

    /// Membership via `(x·b)² + (y·a)² <= (a·b)²`, boundary included.
    pub fn contains(&self, p: Point) -> bool {
        let q = p - self.center;

        q.x * q.x * self.b2 + q.y * q.y * self.a2 <= self.a2 * self.b2
    }

    pub fn domain(&self) -> Domain {
        let half = Point::new(self.a, self.b);

        Domain::new(self.center - half, self.center + half)
    }

    /// Named points: `c`, the cardinals/ordinals of the canonical ellipse,
    /// and the foci `f1`/`f2` at `(±√(a²−b²), 0)`.
    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        let p = match tag {
            "f1" => Point::new((self.a2 - self.b2).sqrt(), 0.0),
            "f2" => Point::new(-(self.a2 - self.b2).sqrt(), 0.0),
            _ => canonical_point(self.a, self.b, tag)
                .ok_or_else(|| NamedPointError::new("ellipse", tag))?,
        };

        Ok(self.center + p)
    }
}

/// The named points every ellipse-like shape shares, relative to the center.
///
/// The ordinals sit at `(±a/√2, ±b/√2)` — the canonical parameter point at
/// 45°, which for a true ellipse is not the boundary point at 45° from the
/// center. This matches the scene language's historical behavior.
pub(crate) fn canonical_point(a: f64, b: f64, tag: &str) -> Option<Point> {
    let p = match tag {
        "c" => Point::ORIGIN,
        "e" => Point::new(a, 0.0),
        "ne" => Point::new(a / 2.0 * SQRT_2, b / 2.0 * SQRT_2),
        "n" => Point::new(0.0, b),
        "nw" => Point::new(-a / 2.0 * SQRT_2, b / 2.0 * SQRT_2),
        "w" => Point::new(-a, 0.0),
        "sw" => Point::new(-a / 2.0 * SQRT_2, -b / 2.0 * SQRT_2),
        "s" => Point::new(0.0, -b),
        "se" => Point::new(a / 2.0 * SQRT_2, -b / 2.0 * SQRT_2),
        _ => return None,
    };

    Some(p)
}
