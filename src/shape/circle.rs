use super::NamedPointError;
use super::ellipse::canonical_point;
use crate::geometry::{Domain, Point};

/// A circle given by its center and radius `r >= 0`.
///
/// Behaves as the ellipse with `a = b = r`, except that the foci tags
/// `f1`/`f2` are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    r2: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(radius >= 0.0);

        Self { center, radius, r2: radius * radius }
    }

    pub fn contains(&self, p: Point) -> bool {
        let q = p - self.center;

        q.x * q.x + q.y * q.y <= self.r2
    }

    pub fn domain(&self) -> Domain {
        let half = Point::new(self.radius, self.radius);

        Domain::new(self.center - half, self.center + half)
    }

    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        if tag == "f1" || tag == "f2" {
            return Err(NamedPointError::new("circle", tag));
        }

        canonical_point(self.radius, self.radius, tag)
            .map(|p| self.center + p)
            .ok_or_else(|| NamedPointError::new("circle", tag))
    }
}
