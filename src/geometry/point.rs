use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A location in the scene plane, doubling as a 2D vector.
///
/// Scene coordinates are real-valued and grow rightwards (x) and upwards (y).
/// `Point` is a plain value type: every operation returns a new point, and
/// the arithmetic operators follow the usual vector conventions (`+`, `-`,
/// scalar `*` and `/`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate the point by `theta` radians around the origin.
    pub fn rotate(self, theta: f64) -> Self {
        self.rotate_cs(theta.cos(), theta.sin())
    }

    /// Rotate around the origin with a precomputed `(cos θ, sin θ)` pair.
    ///
    /// Containment tests call this once per sample point, so callers that
    /// know the angle up front avoid re-evaluating the trigonometry.
    pub fn rotate_cs(self, cos: f64, sin: f64) -> Self {
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Rotate the point by `theta` radians around `pivot`.
    pub fn rotate_about(self, theta: f64, pivot: Self) -> Self {
        (self - pivot).rotate(theta) + pivot
    }

    /// Rotate around `pivot` with a precomputed `(cos θ, sin θ)` pair.
    pub fn rotate_about_cs(self, cos: f64, sin: f64, pivot: Self) -> Self {
        (self - pivot).rotate_cs(cos, sin) + pivot
    }

    /// 2D cross product of two vectors: `u.x·v.y − v.x·u.y`.
    ///
    /// The sign tells on which side of `u` the vector `v` lies; zero means
    /// the two are collinear.
    pub fn cross(u: Self, v: Self) -> f64 {
        u.x * v.y - v.x * u.y
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, n: f64) -> Self {
        Self::new(self.x * n, self.y * n)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, n: f64) -> Self {
        Self::new(self.x / n, self.y / n)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, n: f64) {
        *self = *self * n;
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, n: f64) {
        *self = *self / n;
    }
}
