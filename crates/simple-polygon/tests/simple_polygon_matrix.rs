use proptest::prelude::*;
use simple_polygon::{check_simple_polygon, Point, PolygonError, Segment};

fn poly(points: &[(i64, i64)]) -> Vec<Point> {
    points.iter().copied().map(Point::from).collect()
}

fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
    Segment::new(a.into(), b.into())
}

#[test]
fn simple_shapes_matrix() {
    let cases: &[(&str, &[(i64, i64)])] = &[
        ("triangle", &[(0, 0), (3, 0), (1, 2)]),
        ("square", &[(0, 0), (2, 0), (2, 2), (0, 2)]),
        ("square_cw", &[(0, 0), (0, 2), (2, 2), (2, 0)]),
        ("chevron", &[(0, 0), (4, 2), (0, 4), (2, 2)]),
        ("vertical_sides", &[(0, 0), (0, 5), (3, 5), (3, 0)]),
    ];
    for (name, points) in cases {
        assert_eq!(check_simple_polygon(&poly(points)), Ok(()), "{name}");
    }
}

#[test]
fn bowtie_reports_the_crossing_edges() {
    let err = check_simple_polygon(&poly(&[(0, 0), (2, 2), (2, 0), (0, 2)])).unwrap_err();
    match err {
        PolygonError::Intersection(e) => {
            let mut pair = [e.first, e.second];
            pair.sort();
            assert_eq!(pair, [seg((0, 0), (2, 2)), seg((0, 2), (2, 0))]);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn touching_shapes_are_rejected_matrix() {
    let cases: &[(&str, &[(i64, i64)])] = &[
        ("t_junction", &[(0, 0), (4, 0), (2, 0), (2, 2)]),
        ("spike_back_along_edge", &[(0, 0), (4, 0), (4, 4), (2, 0)]),
        ("pentagram", &[(0, 0), (6, 4), (-2, 4), (4, 0), (2, 6)]),
    ];
    for (name, points) in cases {
        let result = check_simple_polygon(&poly(points));
        assert!(
            matches!(result, Err(PolygonError::Intersection(_))),
            "{name}: {result:?}"
        );
    }
}

#[test]
fn degenerate_input_matrix() {
    assert_eq!(
        check_simple_polygon(&[]),
        Err(PolygonError::TooFewVertices(0))
    );
    assert_eq!(
        check_simple_polygon(&poly(&[(0, 0), (1, 1)])),
        Err(PolygonError::TooFewVertices(2))
    );
    assert_eq!(
        check_simple_polygon(&poly(&[(0, 0), (1, 1), (0, 0)])),
        Err(PolygonError::RepeatedVertex(Point::new(0, 0)))
    );
}

#[test]
fn extreme_coordinates_are_rejected_matrix() {
    let (lo, hi) = (i64::MIN, i64::MAX);
    let cases: &[(&[(i64, i64)], Point)] = &[
        (&[(lo, lo), (hi, lo), (0, hi)], Point::new(lo, lo)),
        (&[(0, 0), (hi, 0), (0, 1)], Point::new(hi, 0)),
        (&[(0, 0), (1, 0), (0, 1 << 62)], Point::new(0, 1 << 62)),
    ];
    for (points, bad) in cases {
        assert_eq!(
            check_simple_polygon(&poly(points)),
            Err(PolygonError::CoordinateOutOfRange(*bad))
        );
    }

    let edge = (1i64 << 62) - 1;
    let big_triangle = poly(&[(-edge, -edge), (edge, -edge), (0, edge)]);
    assert_eq!(check_simple_polygon(&big_triangle), Ok(()));
}

#[test]
fn error_messages_matrix() {
    let err = check_simple_polygon(&poly(&[(0, 0), (2, 2), (2, 0), (0, 2)])).unwrap_err();
    assert!(err.to_string().starts_with("self-intersection: "));
    assert_eq!(
        PolygonError::TooFewVertices(1).to_string(),
        "polygon needs at least 3 vertices, got 1"
    );
}

/// Comb: flat base, zigzag top between y = 1 and y = 2, vertical sides.
fn comb(teeth: i64) -> Vec<Point> {
    let mut points = vec![Point::new(0, 0), Point::new(2 * teeth, 0)];
    for x in (0..=2 * teeth).rev() {
        points.push(Point::new(x, if x % 2 == 0 { 2 } else { 1 }));
    }
    points
}

#[test]
fn comb_is_simple() {
    for teeth in 1..40 {
        assert_eq!(check_simple_polygon(&comb(teeth)), Ok(()), "teeth {teeth}");
    }
}

#[test]
fn comb_with_a_bent_tooth_is_rejected() {
    let mut points = comb(10);
    // The tip at x = 10 pokes below the base.
    let tip = points
        .iter()
        .position(|p| *p == Point::new(10, 2))
        .unwrap();
    points[tip] = Point::new(10, -1);
    assert!(matches!(
        check_simple_polygon(&points),
        Err(PolygonError::Intersection(_))
    ));
}

/// Convex polygon with vertices on `y = x^2`.
fn parabola(n: i64) -> Vec<Point> {
    (0..n).map(|x| Point::new(x, x * x)).collect()
}

proptest! {
    #[test]
    fn convex_polygons_are_simple(n in 3i64..120, shift in -1000i64..1000, reverse in any::<bool>()) {
        let mut points: Vec<Point> = parabola(n)
            .into_iter()
            .map(|p| Point::new(p.x + shift, p.y - shift))
            .collect();
        if reverse {
            points.reverse();
        }
        prop_assert_eq!(check_simple_polygon(&points), Ok(()));
    }

    #[test]
    fn rotating_the_vertex_list_keeps_the_answer(n in 3i64..60, by in 0usize..60) {
        let mut points = parabola(n);
        let by = by % points.len();
        points.rotate_left(by);
        prop_assert_eq!(check_simple_polygon(&points), Ok(()));
    }

    #[test]
    fn swapping_the_first_two_vertices_crosses(n in 4i64..120) {
        let mut points = parabola(n);
        points.swap(0, 1);
        let result = check_simple_polygon(&points);
        prop_assert!(matches!(result, Err(PolygonError::Intersection(_))), "{:?}", result);
    }
}
