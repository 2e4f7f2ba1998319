use collision_core::{collision, Circle, Line, Polygon, Rect, Segment, Shape, Transform, Vec2};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn coord() -> impl Strategy<Value = f64> {
    -50.0..50.0f64
}

fn point() -> impl Strategy<Value = Vec2> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn regular_polygon(center: Vec2, radius: f64, sides: usize, rotation: f64) -> Polygon {
    let step = std::f64::consts::TAU / sides as f64;
    Polygon::new(
        (0..sides)
            .map(|i| center + Vec2::new(radius, 0.0).rotate(rotation + step * i as f64))
            .collect(),
    )
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        point().prop_map(Shape::Point),
        (point(), -40.0..40.0f64, any::<bool>())
            .prop_map(|(p, length, vertical)| Shape::Segment(Segment::new(p, length, vertical))),
        (point(), 0.5..30.0f64, 0.5..30.0f64)
            .prop_map(|(p, w, h)| Shape::Rect(Rect::new(p.x, p.y, w, h))),
        (point(), 0.5..30.0f64).prop_map(|(p, r)| Shape::Circle(Circle::new(p, r))),
        (point(), point()).prop_map(|(a, b)| Shape::Line(Line::new(a, b))),
        (point(), 1.0..30.0f64, 3usize..8, 0.0..std::f64::consts::TAU)
            .prop_map(|(c, r, n, rotation)| Shape::Polygon(regular_polygon(c, r, n, rotation))),
    ]
}

fn assert_close(a: f64, b: f64) {
    if a.is_infinite() || b.is_infinite() {
        assert_eq!(a, b);
    } else {
        assert!((a - b).abs() <= EPSILON * (1.0 + a.abs().max(b.abs())), "{} != {}", a, b);
    }
}

proptest! {
    #[test]
    fn reversed_test_is_negated(a in shape(), b in shape()) {
        prop_assume!(a != b);
        let forward = collision::test(&a, &b);
        let backward = collision::test(&b, &a);

        prop_assert_eq!(forward.overlapping(), backward.overlapping());
        assert_close(forward.distance(), backward.distance());
        assert_close(forward.penetration().x, -backward.penetration().x);
        assert_close(forward.penetration().y, -backward.penetration().y);
    }

    #[test]
    fn zero_penetration_never_overlaps(a in shape(), b in shape()) {
        let result = collision::test(&a, &b);
        if result.penetration().is_zero() {
            prop_assert!(!result.overlapping());
        }
        if result.overlapping() {
            assert_close(result.distance(), result.penetration().magnitude());
        }
        prop_assert!(result.distance() >= 0.0);
    }

    #[test]
    fn penetration_separates_shapes(a in shape(), b in shape()) {
        // The circle axis follows the nearest vertex, which can change once the shape moves.
        let circle_axis = matches!(
            (&a, &b),
            (Shape::Circle(_), Shape::Line(_) | Shape::Polygon(_))
                | (Shape::Line(_) | Shape::Polygon(_), Shape::Circle(_))
        );
        let result = collision::test(&a, &b);
        if result.overlapping() && !circle_axis {
            let moved = a.positioned(&Transform::from_position(result.penetration()));
            let after = collision::test(&moved, &b);
            // Pushed out to (numerically) touching
            prop_assert!(!after.overlapping() || after.penetration().magnitude() < 1e-6);
        }
    }

    #[test]
    fn point_in_rect_matches_containment(p in point(), r in (point(), 0.5..30.0f64, 0.5..30.0f64)) {
        let (origin, w, h) = r;
        let rect = Rect::new(origin.x, origin.y, w, h);
        let inside = p.x > rect.position.x
            && p.x < rect.position.x + w
            && p.y > rect.position.y
            && p.y < rect.position.y + h;
        let result = collision::test(&Shape::Point(p), &Shape::Rect(rect));
        prop_assert_eq!(result.overlapping(), inside);
    }
}
