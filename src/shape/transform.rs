use std::sync::Arc;

use super::{NamedPointError, Shape};
use crate::geometry::{Domain, Point};

/// A shape translated by a fixed offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    offset: Point,
    inner: Arc<Shape>,
}

impl Shift {
    pub fn new(offset: Point, inner: Arc<Shape>) -> Self {
        Self { offset, inner }
    }

    /// Containment in the shifted shape is containment of the un-shifted
    /// sample point in the inner shape.
    pub fn contains(&self, p: Point) -> bool {
        self.inner.contains(p - self.offset)
    }

    pub fn domain(&self) -> Domain {
        self.inner.domain().translate(self.offset)
    }

    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        Ok(self.inner.named_point(tag)? + self.offset)
    }
}

/// A shape rotated by a fixed angle around a pivot point.
///
/// The angle is kept as its `(cos θ, sin θ)` pair so the per-pixel inverse
/// rotation involves no trigonometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    cos: f64,
    sin: f64,
    pivot: Point,
    inner: Arc<Shape>,
}

impl Rotation {
    /// `theta` is in radians; the parser converts from the degrees written
    /// in scene sources.
    pub fn new(theta: f64, pivot: Point, inner: Arc<Shape>) -> Self {
        Self { cos: theta.cos(), sin: theta.sin(), pivot, inner }
    }

    /// Containment is tested by rotating the sample point backwards into
    /// the inner shape's frame.
    pub fn contains(&self, p: Point) -> bool {
        self.inner.contains(p.rotate_about_cs(self.cos, -self.sin, self.pivot))
    }

    /// The hull of the inner domain's four corners rotated into place.
    pub fn domain(&self) -> Domain {
        let dom = self.inner.domain();

        let corners = [
            self.place(dom.min),
            self.place(Point::new(dom.min.x, dom.max.y)),
            self.place(Point::new(dom.max.x, dom.min.y)),
            self.place(dom.max),
        ];

        Domain::hull(&corners)
    }

    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        Ok(self.place(self.inner.named_point(tag)?))
    }

    fn place(&self, p: Point) -> Point {
        p.rotate_about_cs(self.cos, self.sin, self.pivot)
    }
}
