use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};
use std::sync::Arc;

use painton::geometry::Point;
use painton::shape::{
    Circle, Difference, Ellipse, Rectangle, Rotation, Shape, Shift, Triangle, Union,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn close_point(a: Point, b: Point) -> bool {
    close(a.x, b.x) && close(a.y, b.y)
}

/// Sample points on a grid spanning `[-10, 10]²` at half-unit steps.
fn grid() -> Vec<Point> {
    let mut points = Vec::new();
    for i in -20..=20 {
        for j in -20..=20 {
            points.push(Point::new(f64::from(i) * 0.5, f64::from(j) * 0.5));
        }
    }
    points
}

#[test]
fn containment_implies_domain_membership() {
    let rect = Arc::new(Shape::Rectangle(Rectangle::new(Point::new(1.0, -2.0), 6.0, 3.0)));
    let tri = Arc::new(Shape::Triangle(Triangle::new([
        Point::new(-4.0, -4.0),
        Point::new(5.0, -3.0),
        Point::new(0.0, 6.0),
    ])));

    let shapes = [
        Shape::Ellipse(Ellipse::new(Point::new(0.5, 0.5), 5.0, 2.0)),
        Shape::Circle(Circle::new(Point::new(-3.0, 2.0), 4.0)),
        Shape::Rectangle(Rectangle::new(Point::new(1.0, -2.0), 6.0, 3.0)),
        Shape::Triangle(Triangle::new([
            Point::new(-4.0, -4.0),
            Point::new(5.0, -3.0),
            Point::new(0.0, 6.0),
        ])),
        Shape::Shift(Shift::new(Point::new(2.5, -1.5), Arc::clone(&tri))),
        Shape::Rotation(Rotation::new(1.1, Point::new(1.0, 1.0), Arc::clone(&rect))),
        Shape::Union(Union::new(vec![Arc::clone(&rect), Arc::clone(&tri)])),
        Shape::Difference(Difference::new(Arc::clone(&rect), Arc::clone(&tri))),
    ];

    for shape in &shapes {
        let domain = shape.domain();
        for p in grid() {
            if shape.contains(p) {
                assert!(domain.contains(p), "{shape:?} contains {p:?} outside its domain");
            }
        }
    }
}

#[test]
fn rectangle_is_symmetric_about_its_center() {
    let center = Point::new(2.0, -1.0);
    let rect = Rectangle::new(center, 7.0, 3.0);

    for p in grid() {
        let mirrored = center + (center - p);
        assert_eq!(rect.contains(p), rect.contains(mirrored));
    }
}

#[test]
fn circle_matches_the_equal_axis_ellipse() {
    let center = Point::new(-1.0, 3.0);
    let circle = Circle::new(center, 4.5);
    let ellipse = Ellipse::new(center, 4.5, 4.5);

    for p in grid() {
        assert_eq!(circle.contains(p), ellipse.contains(p));
    }
}

#[test]
fn shift_is_containment_of_the_unshifted_point() {
    let inner = Arc::new(Shape::Ellipse(Ellipse::new(Point::new(0.0, 0.0), 4.0, 2.0)));
    let offset = Point::new(3.0, -2.0);
    let shifted = Shift::new(offset, Arc::clone(&inner));

    for p in grid() {
        assert_eq!(shifted.contains(p), inner.contains(p - offset));
    }
}

#[test]
fn rotation_is_containment_of_the_unrotated_point() {
    let inner = Arc::new(Shape::Rectangle(Rectangle::new(Point::new(2.0, 0.0), 6.0, 2.0)));
    let pivot = Point::new(1.0, 1.0);
    let theta = 0.7;
    let rotated = Rotation::new(theta, pivot, Arc::clone(&inner));

    for p in grid() {
        assert_eq!(rotated.contains(p), inner.contains(p.rotate_about(-theta, pivot)));
    }
}

#[test]
fn singleton_union_behaves_like_its_member() {
    let member = Arc::new(Shape::Circle(Circle::new(Point::new(1.0, 1.0), 3.0)));
    let union = Union::new(vec![Arc::clone(&member)]);

    for p in grid() {
        assert_eq!(union.contains(p), member.contains(p));
    }
}

#[test]
fn difference_with_a_disjoint_cut_is_the_base() {
    let base = Arc::new(Shape::Circle(Circle::new(Point::new(0.0, 0.0), 3.0)));
    // The cut's domain does not intersect the base's.
    let cut = Arc::new(Shape::Circle(Circle::new(Point::new(100.0, 100.0), 1.0)));
    let difference = Difference::new(Arc::clone(&base), cut);

    for p in grid() {
        assert_eq!(difference.contains(p), base.contains(p));
    }
}

#[test]
fn rotating_a_long_rectangle_swaps_its_extents() {
    let flat = Arc::new(Shape::Rectangle(Rectangle::new(Point::ORIGIN, 10.0, 2.0)));
    let upright = Rotation::new(FRAC_PI_2, Point::ORIGIN, flat);

    assert!(upright.contains(Point::new(0.0, 4.0)));
    assert!(!upright.contains(Point::new(4.0, 0.0)));

    let domain = upright.domain();
    assert!(close(domain.min.x, -1.0) && close(domain.max.x, 1.0));
    assert!(close(domain.min.y, -5.0) && close(domain.max.y, 5.0));
}

#[test]
fn triangle_boundary_and_interior() {
    let tri = Triangle::new([
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 4.0),
    ]);

    assert!(tri.contains(Point::new(1.0, 1.0)));
    assert!(!tri.contains(Point::new(3.0, 3.0)));
    // On an edge and on a vertex.
    assert!(tri.contains(Point::new(2.0, 0.0)));
    assert!(tri.contains(Point::new(0.0, 0.0)));
    // On the supporting line of an edge, but beyond the endpoints.
    assert!(!tri.contains(Point::new(5.0, 0.0)));
}

#[test]
fn ellipse_named_points() {
    let ellipse = Ellipse::new(Point::new(1.0, 2.0), 5.0, 3.0);

    assert_eq!(ellipse.named_point("c").unwrap(), Point::new(1.0, 2.0));
    assert_eq!(ellipse.named_point("e").unwrap(), Point::new(6.0, 2.0));
    assert_eq!(ellipse.named_point("n").unwrap(), Point::new(1.0, 5.0));

    // The ordinals sit at (±a/√2, ±b/√2) from the center, not on the 45°
    // ray from it.
    let ne = ellipse.named_point("ne").unwrap();
    assert!(close_point(ne, Point::new(1.0 + 5.0 / SQRT_2, 2.0 + 3.0 / SQRT_2)));

    // Foci at (±√(a²−b²), 0): √(25−9) = 4.
    assert_eq!(ellipse.named_point("f1").unwrap(), Point::new(5.0, 2.0));
    assert_eq!(ellipse.named_point("f2").unwrap(), Point::new(-3.0, 2.0));

    assert!(ellipse.named_point("v0").is_err());
}

#[test]
fn circle_rejects_the_foci() {
    let circle = Circle::new(Point::new(0.0, 0.0), 2.0);

    assert_eq!(circle.named_point("e").unwrap(), Point::new(2.0, 0.0));
    assert!(circle.named_point("f1").is_err());
    assert!(circle.named_point("f2").is_err());

    let err = circle.named_point("f1").unwrap_err();
    assert_eq!(err.to_string(), "invalid circle named point f1");
}

#[test]
fn rectangle_named_points() {
    let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);

    assert_eq!(rect.named_point("ne").unwrap(), Point::new(5.0, 5.0));
    assert_eq!(rect.named_point("sw").unwrap(), Point::new(-5.0, -5.0));
    assert_eq!(rect.named_point("e").unwrap(), Point::new(5.0, 0.0));
    assert_eq!(rect.named_point("n").unwrap(), Point::new(0.0, 5.0));
    assert!(rect.named_point("f1").is_err());
}

#[test]
fn triangle_named_points() {
    let tri = Triangle::new([
        Point::new(0.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(0.0, 3.0),
    ]);

    assert_eq!(tri.named_point("c").unwrap(), Point::new(2.0, 1.0));
    assert_eq!(tri.named_point("v1").unwrap(), Point::new(6.0, 0.0));
    assert_eq!(tri.named_point("s01").unwrap(), Point::new(3.0, 0.0));
    assert_eq!(tri.named_point("s02").unwrap(), Point::new(0.0, 1.5));
    assert!(tri.named_point("ne").is_err());
}

#[test]
fn combinators_delegate_named_points() {
    let rect = Arc::new(Shape::Rectangle(Rectangle::new(Point::ORIGIN, 4.0, 2.0)));
    let circle = Arc::new(Shape::Circle(Circle::new(Point::new(8.0, 0.0), 1.0)));

    let shifted = Shift::new(Point::new(10.0, 5.0), Arc::clone(&rect));
    assert_eq!(shifted.named_point("ne").unwrap(), Point::new(12.0, 6.0));

    let rotated = Rotation::new(PI, Point::ORIGIN, Arc::clone(&rect));
    let ne = rotated.named_point("ne").unwrap();
    assert!(close_point(ne, Point::new(-2.0, -1.0)));

    // Unions resolve named points against their first member only.
    let union = Union::new(vec![Arc::clone(&rect), Arc::clone(&circle)]);
    assert_eq!(union.named_point("ne").unwrap(), Point::new(2.0, 1.0));

    let difference = Difference::new(Arc::clone(&rect), Arc::clone(&circle));
    assert_eq!(difference.named_point("sw").unwrap(), Point::new(-2.0, -1.0));
    assert!(difference.named_point("v0").is_err());
}

#[test]
fn union_domain_spans_all_members() {
    let a = Arc::new(Shape::Circle(Circle::new(Point::new(-5.0, 0.0), 2.0)));
    let b = Arc::new(Shape::Rectangle(Rectangle::new(Point::new(4.0, 3.0), 2.0, 4.0)));
    let union = Union::new(vec![a, b]);

    let domain = union.domain();
    assert_eq!(domain.min, Point::new(-7.0, -2.0));
    assert_eq!(domain.max, Point::new(5.0, 5.0));
}
