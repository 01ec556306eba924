use std::sync::Arc;

use super::{NamedPointError, Shape};
use crate::geometry::{Domain, Point};

/// The union of a non-empty, ordered set of shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    members: Vec<Arc<Shape>>,
}

impl Union {
    pub fn new(members: Vec<Arc<Shape>>) -> Self {
        debug_assert!(!members.is_empty());

        Self { members }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.members.iter().any(|member| member.contains(p))
    }

    pub fn domain(&self) -> Domain {
        let mut dom = self.members[0].domain();

        for member in &self.members[1..] {
            dom = dom.union(member.domain());
        }

        dom
    }

    /// Named points on a union resolve against its first member only.
    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        self.members[0].named_point(tag)
    }
}

/// A base shape with a second shape cut out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    base: Arc<Shape>,
    cut: Arc<Shape>,
}

impl Difference {
    pub fn new(base: Arc<Shape>, cut: Arc<Shape>) -> Self {
        Self { base, cut }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.base.contains(p) && !self.cut.contains(p)
    }

    /// The cut shape can only remove area, so the base domain bounds the
    /// difference.
    pub fn domain(&self) -> Domain {
        self.base.domain()
    }

    pub fn named_point(&self, tag: &str) -> Result<Point, NamedPointError> {
        self.base.named_point(tag)
    }
}
