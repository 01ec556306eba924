use super::NamedPointError;
use crate::geometry::{Domain, Point};

/// A triangle given by its three vertices, with the centroid derived at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
    centroid: Point,
}

impl Triangle {
    pub fn new(vertices: [Point; 3]) -> Self {
        let centroid = (vertices[0] + vertices[1] + vertices[2]) / 3.0;

        Self { vertices, centroid }
    }

    /// Sign-of-cross-product walk around the edges.
    ///
    /// A zero cross product means `p` lies on the supporting line of an
    /// edge; it then counts as inside exactly when it sits between the two
    /// endpoints, decided by the sign of the x-components of the vertex
    /// vectors.
    pub fn contains(&self, p: Point) -> bool {
        let v = [
            p - self.vertices[0],
            p - self.vertices[1],
            p - self.vertices[2],
        ];

        let mut sign = None;

        for i in 0..3 {
            let j = (i + 1) % 3;
            let cross = Point::cross(v[i], v[j]);

            if cross == 0.0 {
                return v[i].x * v[j].x <= 0.0;
            }

            let positive = cross > 0.0;
            if *sign.get_or_insert(positive) != positive {
                return false;
            }
        }

        true
    }

    pub fn domain(&self) -> Domain {
        Domain::hull(&self.vertices)
    }

    /// Named points: `c` (centroid), vertices `v0`/`v1`/`v2` and edge
    /// midpoints `s01`/`s12`/`s02`.
    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        let [v0, v1, v2] = self.vertices;

        let p = match tag {
            "c" => self.centroid,
            "v0" => v0,
            "v1" => v1,
            "v2" => v2,
            "s01" => (v0 + v1) / 2.0,
            "s12" => (v1 + v2) / 2.0,
            "s02" => (v0 + v2) / 2.0,
            _ => return Err(NamedPointError::new("triangle", tag)),
        };

        Ok(p)
    }
}
