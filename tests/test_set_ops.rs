use pretty_assertions::assert_eq;
use rect2d::{contains, expand, intersection, point_in_rectangle, union, xywh, Coord, Coordf, Rectangle, Rectanglef};

fn rect(x1: i64, y1: i64, x2: i64, y2: i64) -> Rectangle {
    Rectangle::new(Coord::new(x1, y1), Coord::new(x2, y2))
}

#[test]
fn test_point_in_rectangle_half_open() {
    let r = xywh(0, 0, 10, 10);
    assert!(point_in_rectangle(r, Coord::new(9, 9)));
    assert!(point_in_rectangle(r, Coord::new(0, 0)));
    assert!(!point_in_rectangle(r, Coord::new(10, 10)));
    assert!(!point_in_rectangle(r, Coord::new(10, 5)));
    assert!(!point_in_rectangle(r, Coord::new(5, 10)));
    assert!(!point_in_rectangle(r, Coord::new(-1, 5)));
    assert!(!point_in_rectangle(r, Coord::new(5, -1)));
}

#[test]
fn test_point_in_rectangle_float_edges() {
    let r = Rectanglef::from_xywh(0.0, 0.0, 1.0, 1.0);
    assert!(r.contains_point(Coordf::new(0.999, 0.0)));
    assert!(!r.contains_point(Coordf::new(1.0, 0.5)));
}

#[test]
fn test_point_in_empty_rectangle() {
    let r = xywh(3, 3, 0, 5);
    assert!(!r.contains_point(Coord::new(3, 4)));
}

#[test]
fn test_intersection_overlapping() {
    let (r, ok) = intersection(xywh(0, 0, 10, 10), xywh(5, 5, 10, 10));
    assert!(ok);
    assert_eq!(r.min, Coord::new(5, 5));
    assert_eq!(r.max, Coord::new(10, 10));

    // Overlap max sits on the first input's exclusive max edge, so it is
    // not contained there even though the flag is set
    assert!(!contains(xywh(0, 0, 10, 10), r));
    assert!(contains(xywh(5, 5, 10, 10), r));
}

#[test]
fn test_intersection_disjoint() {
    let (r, ok) = intersection(xywh(0, 0, 5, 5), xywh(10, 10, 5, 5));
    assert!(!ok);
    // Best-effort result, not a sentinel
    assert_eq!(r, rect(10, 10, 5, 5));
    assert!(!r.is_normal());
}

#[test]
fn test_intersection_disjoint_on_one_axis() {
    let (_, ok) = intersection(xywh(0, 0, 5, 5), xywh(2, 8, 5, 5));
    assert!(!ok);
}

#[test]
fn test_intersection_touching_edges_is_normal_but_empty() {
    let (r, ok) = intersection(xywh(0, 0, 5, 5), xywh(5, 0, 5, 5));
    assert!(ok);
    assert!(r.is_empty());
    assert_eq!(r, rect(5, 0, 5, 5));
}

#[test]
fn test_intersect_option() {
    let a = xywh(0, 0, 10, 10);
    assert_eq!(a.intersect(&xywh(5, 5, 10, 10)), Some(rect(5, 5, 10, 10)));
    assert_eq!(a.intersect(&xywh(20, 20, 1, 1)), None);
}

#[test]
fn test_intersection_strictly_inside_both() {
    let r1 = xywh(0, 0, 20, 20);
    let r2 = xywh(5, 5, 10, 10);
    let (i, ok) = intersection(r1, r2);
    assert!(ok);
    assert_eq!(i, r2);
    assert!(contains(r1, i));

    let r1 = xywh(0, 0, 10, 10);
    let r2 = xywh(4, -5, 2, 30);
    let (i, ok) = intersection(r1, r2);
    assert!(ok);
    assert_eq!(i, rect(4, 0, 6, 10));
}

#[test]
fn test_union() {
    let u = union(xywh(0, 0, 5, 5), xywh(10, 10, 5, 5));
    assert_eq!(u, rect(0, 0, 15, 15));
    assert!(u.is_normal());

    let u = union(xywh(-3, 4, 2, 2), xywh(1, -6, 1, 1));
    assert_eq!(u, rect(-3, -6, 2, 6));
}

#[test]
fn test_union_contains_inputs_away_from_max_edge() {
    let a = xywh(0, 0, 4, 4);
    let b = xywh(2, 2, 3, 3);
    let u = union(a, b).expanded(Coord::new(1, 1));
    assert!(contains(u, a));
    assert!(contains(u, b));
}

#[test]
fn test_union_does_not_contain_input_sharing_max_corner() {
    let a = xywh(0, 0, 4, 4);
    let b = xywh(2, 2, 3, 3);
    let u = union(a, b);
    // a sits strictly inside on the max side, b shares it
    assert!(contains(u, a));
    assert!(!contains(u, b));
}

#[test]
fn test_contains_inner() {
    let outer = xywh(0, 0, 10, 10);
    assert!(contains(outer, xywh(1, 1, 5, 5)));
    assert!(contains(outer, xywh(0, 0, 9, 9)));
    assert!(!contains(outer, xywh(-1, 1, 5, 5)));
    assert!(!contains(outer, xywh(5, 5, 10, 10)));
}

#[test]
fn test_contains_rejects_max_edge() {
    let outer = xywh(0, 0, 10, 10);
    // Inner max lands on the exclusive edge
    assert!(!contains(outer, xywh(2, 2, 8, 8)));
    assert!(!outer.contains(&outer));
}

#[test]
fn test_expand_strictly_encloses() {
    let samples = [xywh(0, 0, 1, 1), xywh(-5, 3, 10, 0), xywh(7, 7, 2, 9)];
    for r in samples {
        assert!(contains(expand(r, Coord::new(1, 1)), r));
        assert!(contains(expand(r, Coord::new(3, 2)), r));
    }

    let rf = Rectanglef::from_xywh(0.5, 0.5, 2.0, 2.0);
    assert!(contains(expand(rf, Coordf::new(0.25, 0.25)), rf));
}

#[test]
fn test_contains_points_mask() {
    let r = xywh(0, 0, 10, 10);
    let points = [Coord::new(0, 0), Coord::new(9, 9), Coord::new(10, 10), Coord::new(-1, 3), Coord::new(5, 10)];
    assert_eq!(r.contains_points(points), vec![true, true, false, false, false]);
    assert_eq!(r.contains_points(Vec::new()), Vec::<bool>::new());

    let rf = Rectanglef::from_xywh(0.0, 0.0, 1.0, 1.0);
    assert_eq!(rf.contains_points([Coordf::new(0.5, 0.5), Coordf::new(1.0, 0.5)]), vec![true, false]);
}
