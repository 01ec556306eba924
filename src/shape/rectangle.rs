use super::NamedPointError;
use crate::geometry::{Domain, Point};

/// An axis-aligned rectangle given by its center and full width/height.
///
/// Half-extents are stored, matching the containment test `|x| <= w/2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    center: Point,
    half_width: f64,
    half_height: f64,
}

impl Rectangle {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0);

        Self { center, half_width: width / 2.0, half_height: height / 2.0 }
    }

    pub fn contains(&self, p: Point) -> bool {
        let q = p - self.center;

        q.x.abs() <= self.half_width && q.y.abs() <= self.half_height
    }

    pub fn domain(&self) -> Domain {
        let half = Point::new(self.half_width, self.half_height);

        Domain::new(self.center - half, self.center + half)
    }

    /// Named points: `c`, the corners `ne`/`se`/`sw`/`nw` and the edge
    /// midpoints `e`/`s`/`w`/`n`.
    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        let (w, h) = (self.half_width, self.half_height);

        let p = match tag {
            "c" => Point::ORIGIN,
            "ne" => Point::new(w, h),
            "se" => Point::new(w, -h),
            "sw" => Point::new(-w, -h),
            "nw" => Point::new(-w, h),
            "e" => Point::new(w, 0.0),
            "s" => Point::new(0.0, -h),
            "w" => Point::new(-w, 0.0),
            "n" => Point::new(0.0, h),
            _ => return Err(NamedPointError::new("rectangle", tag)),
        };

        Ok(self.center + p)
    }
}
