use super::point::Point;

/// Axis-aligned bounding box of a shape, given by two opposite corners.
///
/// `min` holds the smallest coordinates on both axes and `max` the largest,
/// so `min.x <= max.x` and `min.y <= max.y` always hold. The rasterizer
/// clips its pixel loops against a fill's domain before testing containment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: Point,
    pub max: Point,
}

impl Domain {
    pub fn new(min: Point, max: Point) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    /// Smallest domain enclosing all of `points`.
    ///
    /// Panics on an empty slice; every caller passes a fixed, non-empty set
    /// of corners or vertices.
    pub fn hull(points: &[Point]) -> Self {
        let mut dom = Self { min: points[0], max: points[0] };

        for p in &points[1..] {
            dom.min.x = dom.min.x.min(p.x);
            dom.min.y = dom.min.y.min(p.y);
            dom.max.x = dom.max.x.max(p.x);
            dom.max.y = dom.max.y.max(p.y);
        }

        dom
    }

    /// Smallest domain enclosing both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// The domain shifted by the vector `v`.
    pub fn translate(self, v: Point) -> Self {
        Self { min: self.min + v, max: self.max + v }
    }

    /// Whether `p` lies inside the box, boundary included.
    pub fn contains(self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}
