use super::*;
use crate::kernel::{cross, signed_area_2x, Exact, Kernel, Orientation, Point2};
use crate::sample::{
    convex_hull, draw_polygon_radial, fan_partition, insert_steiner, snap_to_grid, RadialCfg,
    ReplayToken, VertexCount,
};
use num_rational::Rational64;
use proptest::prelude::*;

type K = Exact<Rational64>;
type P = Point2<Rational64>;

fn q(x: i64, y: i64) -> P {
    Point2::new(Rational64::from_integer(x), Rational64::from_integer(y))
}

fn pts(coords: &[(i64, i64)]) -> Vec<P> {
    coords.iter().map(|&(x, y)| q(x, y)).collect()
}

fn square4() -> Vec<P> {
    pts(&[(0, 0), (4, 0), (4, 4), (0, 4)])
}

fn halves() -> Vec<Vec<P>> {
    vec![
        pts(&[(0, 0), (2, 0), (2, 4), (0, 4)]),
        pts(&[(2, 0), (4, 0), (4, 4), (2, 4)]),
    ]
}

#[test]
fn cursor_returns_after_full_turn() {
    let items = [1, 2, 3];
    let mut c = Cursor::new(&items, 1);
    assert_eq!(*c.get(), 2);
    assert!(!c.has_returned());
    c.advance();
    c.advance();
    assert_eq!(*c.get(), 1);
    assert!(!c.has_returned());
    c.advance();
    assert!(c.has_returned());
    assert_eq!(c.steps(), 3);
}

#[test]
fn exact_matcher_is_rotation_invariant_only() {
    assert!(polygons_are_equal(&[1, 2, 3, 4], &[3, 4, 1, 2]));
    assert!(!polygons_are_equal(&[1, 2, 3, 4], &[4, 3, 2, 1]));
    assert!(!polygons_are_equal(&[1, 2, 3], &[1, 2, 3, 4]));
    assert!(!polygons_are_equal(&[1, 2, 3, 4], &[2, 3, 1]));
    assert!(!polygons_are_equal(&[1, 2, 3], &[5, 6, 7]));
    assert!(polygons_are_equal::<i32>(&[], &[]));
    assert!(!polygons_are_equal(&[], &[1]));
}

#[test]
fn steiner_matcher_accepts_points_inside_edges() {
    let k = K::new();
    let orig = square4();
    // rotated, with Steiner points on two edges including the closing one
    let cand = pts(&[(4, 0), (4, 4), (2, 4), (0, 4), (0, 0), (1, 0), (3, 0)]);
    assert!(polygons_w_steiner_are_equal(&k, &orig, &cand));
    assert!(polygons_w_steiner_are_equal(&k, &orig, &orig));

    let closing = pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 2)]);
    assert!(polygons_w_steiner_are_equal(&k, &orig, &closing));
}

#[test]
fn steiner_matcher_rejects_stray_points() {
    let k = K::new();
    let orig = square4();
    // off the edge
    let bent = pts(&[(0, 0), (2, 1), (4, 0), (4, 4), (0, 4)]);
    assert!(!polygons_w_steiner_are_equal(&k, &orig, &bent));
    // on the line, past the next original vertex
    let past = pts(&[(0, 0), (5, 0), (4, 0), (4, 4), (0, 4)]);
    assert!(!polygons_w_steiner_are_equal(&k, &orig, &past));
    // a missing original vertex
    let short = pts(&[(0, 0), (4, 0), (0, 4)]);
    assert!(!polygons_w_steiner_are_equal(&k, &orig, &short));
    let missing_anchor = pts(&[(4, 0), (4, 4), (0, 4)]);
    assert!(!polygons_w_steiner_are_equal(&k, &orig, &missing_anchor));
}

#[test]
fn single_piece_is_its_own_partition() {
    let k = K::new();
    let sq = square4();
    let parts = vec![sq.clone()];
    assert_eq!(convex_partition_is_valid_2(&k, sq.clone(), &parts), Ok(true));
    assert_eq!(y_monotone_partition_is_valid_2(&k, sq.clone(), &parts), Ok(true));
    assert_eq!(any_partition_is_valid_2(&k, sq.clone(), &parts), Ok(true));
    // any rotation of the piece
    let rotated = vec![pts(&[(4, 4), (0, 4), (0, 0), (4, 0)])];
    assert_eq!(convex_partition_is_valid_2(&k, sq, &rotated), Ok(true));
}

#[test]
fn overlapping_triangles_are_rejected() {
    let k = K::new();
    let orig = pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
    let parts = vec![pts(&[(0, 0), (2, 0), (2, 2)]), pts(&[(0, 0), (2, 0), (0, 2)])];
    assert_eq!(
        partition_report(&k, orig.clone(), &parts, &Vacuous),
        Ok(Verdict::Invalid(InvalidReason::Overlap))
    );
    assert_eq!(convex_partition_is_valid_2(&k, orig, &parts), Ok(false));
}

#[test]
fn crossing_edges_count_as_overlap() {
    let k = K::new();
    let parts = vec![pts(&[(0, 0), (4, 0), (0, 4)]), pts(&[(1, 1), (5, 1), (1, 5)])];
    assert!(VertexMap::new(&k, &parts).polygons_overlap());
    assert!(!VertexMap::new(&k, &halves()).polygons_overlap());
}

#[test]
fn nested_piece_touching_edge_interiors_overlaps() {
    let k = K::new();
    let outer = pts(&[(0, 0), (3, 3), (0, 3)]);
    // (1, 3) sits inside the top edge of `outer`, not on one of its vertices
    let inner = pts(&[(1, 3), (1, 2), (2, 2)]);
    let parts = vec![outer.clone(), inner];
    assert!(VertexMap::new(&k, &parts).polygons_overlap());
    assert_eq!(
        partition_report(&k, outer, &parts, &Vacuous),
        Ok(Verdict::Invalid(InvalidReason::Overlap))
    );
}

#[test]
fn nested_piece_on_a_shared_edge_line_overlaps() {
    let k = K::new();
    let along_bottom = vec![square4(), pts(&[(1, 0), (3, 0), (2, 2)])];
    assert!(VertexMap::new(&k, &along_bottom).polygons_overlap());
    let tip_on_bottom = vec![square4(), pts(&[(2, 0), (3, 1), (1, 1)])];
    assert!(VertexMap::new(&k, &tip_on_bottom).polygons_overlap());
    let floating = vec![square4(), pts(&[(1, 1), (3, 1), (2, 3)])];
    assert!(VertexMap::new(&k, &floating).polygons_overlap());
}

#[test]
fn pieces_touching_along_part_of_an_edge_do_not_overlap() {
    let k = K::new();
    let parts = vec![
        pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]),
        pts(&[(2, 1), (4, 1), (4, 3), (2, 3)]),
    ];
    assert!(!VertexMap::new(&k, &parts).polygons_overlap());
    let apex_to_apex = vec![
        pts(&[(0, 0), (4, 0), (2, 2)]),
        pts(&[(2, 2), (3, 4), (1, 4)]),
    ];
    assert!(!VertexMap::new(&k, &apex_to_apex).polygons_overlap());
}

#[test]
fn steiner_vertices_on_shared_cut() {
    let k = K::new();
    let orig = square4();
    let parts = halves();
    let map = VertexMap::new(&k, &parts);
    assert_eq!(map.len(), 6);
    assert_eq!(map.incidences(map.len() - 1).len(), 1);
    let union = map.union_boundary();
    assert!(union.is_single_loop());
    assert_eq!(
        union.vertices,
        pts(&[(0, 0), (2, 0), (4, 0), (4, 4), (2, 4), (0, 4)])
    );
    assert!(!polygons_are_equal(&orig, &union.vertices));
    assert!(polygons_w_steiner_are_equal(&k, &orig, &union.vertices));
    assert_eq!(convex_partition_is_valid_2(&k, orig, &parts), Ok(true));
}

#[test]
fn property_is_enforced_per_piece() {
    let k = K::new();
    let notch = pts(&[(0, 0), (4, 0), (3, 2), (4, 4), (0, 4)]);
    let parts = vec![notch.clone()];
    assert_eq!(
        partition_report(&k, notch.clone(), &parts, &Convex),
        Ok(Verdict::Invalid(InvalidReason::CheckFailed { index: 0 }))
    );
    assert_eq!(y_monotone_partition_is_valid_2(&k, notch.clone(), &parts), Ok(true));
    assert_eq!(any_partition_is_valid_2(&k, notch.clone(), &parts), Ok(true));
    assert_eq!(
        partition_is_valid_2(&k, notch, &parts, &CheckKind::Convex),
        Ok(false)
    );

    let comb = pts(&[(0, 0), (4, 0), (4, 4), (3, 1), (2, 4), (1, 1), (0, 4)]);
    let parts = vec![comb.clone()];
    assert_eq!(y_monotone_partition_is_valid_2(&k, comb.clone(), &parts), Ok(false));
    assert_eq!(any_partition_is_valid_2(&k, comb, &parts), Ok(true));
}

#[test]
fn closures_work_as_checks() {
    let k = K::new();
    let only_triangles = |_: &K, v: &[P]| v.len() == 3;
    let orig = square4();
    let tris = fan_partition(&orig);
    assert_eq!(partition_is_valid_2(&k, orig.clone(), &tris, &only_triangles), Ok(true));
    assert_eq!(
        partition_is_valid_2(&k, orig, &halves(), &only_triangles),
        Ok(false)
    );
}

#[test]
fn contract_breaches_are_errors() {
    let k = K::new();
    let cw: Vec<P> = square4().into_iter().rev().collect();
    assert_eq!(
        any_partition_is_valid_2(&k, cw.clone(), &[cw]),
        Err(PartitionError::NotCounterClockwise)
    );
    assert_eq!(
        any_partition_is_valid_2(&k, pts(&[(0, 0), (1, 0)]), &[square4()]),
        Err(PartitionError::TooFewVertices(2))
    );

    let mut parts = halves();
    parts[1].reverse();
    assert_eq!(
        any_partition_is_valid_2(&k, square4(), &parts),
        Err(PartitionError::SubPolygonNotCounterClockwise { index: 1 })
    );
    let parts = vec![square4(), pts(&[(0, 0), (1, 1)])];
    assert_eq!(
        any_partition_is_valid_2(&k, square4(), &parts),
        Err(PartitionError::SubPolygonTooFewVertices { index: 1, len: 2 })
    );
}

#[test]
fn empty_partitions() {
    let k = K::new();
    let none: Vec<Vec<P>> = Vec::new();
    assert_eq!(any_partition_is_valid_2(&k, Vec::new(), &none), Ok(true));
    assert_eq!(
        partition_report(&k, square4(), &none, &Vacuous),
        Ok(Verdict::Invalid(InvalidReason::EmptyPartition))
    );
    assert_eq!(convex_partition_is_valid_2(&k, square4(), &none), Ok(false));
}

#[test]
fn incomplete_or_disconnected_cover() {
    let k = K::new();
    let left = vec![halves().remove(0)];
    assert_eq!(
        partition_report(&k, square4(), &left, &Vacuous),
        Ok(Verdict::Invalid(InvalidReason::BoundaryMismatch))
    );

    let big = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
    let islands = vec![
        pts(&[(0, 0), (1, 0), (1, 1), (0, 1)]),
        pts(&[(5, 5), (6, 5), (6, 6), (5, 6)]),
    ];
    assert_eq!(
        partition_report(&k, big, &islands, &Vacuous),
        Ok(Verdict::Invalid(InvalidReason::BoundaryNotClosed))
    );
}

#[test]
fn pinched_union_takes_first_clockwise_exit() {
    let k = K::new();
    let parts = vec![pts(&[(0, 0), (2, 0), (1, 1)]), pts(&[(1, 1), (2, 2), (0, 2)])];
    let union = VertexMap::new(&k, &parts).union_boundary();
    assert!(union.closed);
    assert_eq!(union.untraced_edges, 3);
    assert!(!union.is_single_loop());
    assert_eq!(union.vertices, pts(&[(0, 0), (2, 0), (1, 1)]));
}

#[test]
fn check_kind_names_round_trip() {
    for kind in [CheckKind::Vacuous, CheckKind::Convex, CheckKind::YMonotone] {
        assert_eq!(kind.to_string().parse::<CheckKind>(), Ok(kind));
    }
    assert!("star-shaped".parse::<CheckKind>().is_err());
    assert_eq!(InvalidReason::Overlap.to_string(), "sub-polygons overlap");
}

fn lattice_polygon(seed: u64, index: u64, n: usize) -> Vec<P> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let Some(poly) = draw_polygon_radial(cfg, ReplayToken::new(seed, index)) else {
        return Vec::new();
    };
    let lifted: Vec<P> = snap_to_grid(&poly, 50.0)
        .iter()
        .map(|p| q(p.x, p.y))
        .collect();
    convex_hull(&K::new(), &lifted)
}

/// Twice the area of `subject ∩ clip` for convex counter-clockwise inputs.
fn clipped_area_2x(subject: &[P], clip: &[P]) -> Rational64 {
    let zero = Rational64::from_integer(0);
    let mut poly = subject.to_vec();
    let n = clip.len();
    for i in 0..n {
        let (a, b) = (&clip[i], &clip[(i + 1) % n]);
        let m = poly.len();
        let mut next = Vec::with_capacity(m + 1);
        for j in 0..m {
            let (p, r) = (&poly[j], &poly[(j + 1) % m]);
            let (sp, sr) = (cross(a, b, p), cross(a, b, r));
            if sp >= zero {
                next.push(*p);
            }
            if (sp > zero && sr < zero) || (sp < zero && sr > zero) {
                let t = sp / (sp - sr);
                next.push(Point2::new(p.x + (r.x - p.x) * t, p.y + (r.y - p.y) * t));
            }
        }
        poly = next;
        if poly.is_empty() {
            break;
        }
    }
    signed_area_2x(&poly)
}

fn grid_triangle() -> impl Strategy<Value = Vec<P>> {
    prop::array::uniform3((0i64..=4, 0i64..=4)).prop_filter_map("flat triangle", |c| {
        let mut t = pts(&c);
        match K::new().orientation(&t[0], &t[1], &t[2]) {
            Orientation::Collinear => None,
            Orientation::Clockwise => {
                t.reverse();
                Some(t)
            }
            Orientation::CounterClockwise => Some(t),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn overlap_matches_clipped_area(t in grid_triangle(), u in grid_triangle()) {
        let k = K::new();
        let expected = clipped_area_2x(&t, &u) > Rational64::from_integer(0);
        let parts = vec![t, u];
        prop_assert_eq!(VertexMap::new(&k, &parts).polygons_overlap(), expected);
    }

    #[test]
    fn fan_partitions_are_valid_convex(seed in any::<u64>(), n in 3usize..14, rot in 0usize..14) {
        let k = K::new();
        let poly = lattice_polygon(seed, 0, n);
        prop_assume!(poly.len() >= 3);
        let mut parts = fan_partition(&poly);
        prop_assert_eq!(convex_partition_is_valid_2(&k, poly.clone(), &parts), Ok(true));

        // piece starting vertex and piece order are irrelevant
        for part in parts.iter_mut() {
            let r = rot % part.len();
            part.rotate_left(r);
        }
        parts.reverse();
        prop_assert_eq!(convex_partition_is_valid_2(&k, poly.clone(), &parts), Ok(true));

        if parts.len() >= 2 {
            parts.pop();
            prop_assert_eq!(any_partition_is_valid_2(&k, poly, &parts), Ok(false));
        }
    }

    #[test]
    fn steiner_points_on_the_boundary_are_tolerated(
        seed in any::<u64>(),
        n in 3usize..14,
        edge in 0usize..14,
    ) {
        let k = K::new();
        let poly = lattice_polygon(seed, 1, n);
        prop_assume!(poly.len() >= 3);
        let mut parts = fan_partition(&poly);
        let e = edge % poly.len();
        let hit = insert_steiner(&mut parts, &poly[e], &poly[(e + 1) % poly.len()]);
        prop_assert!(hit.is_some());

        let union = VertexMap::new(&k, &parts).union_vertices();
        prop_assert_eq!(union.len(), poly.len() + 1);
        prop_assert!(!polygons_are_equal(&poly, &union));
        prop_assert!(polygons_w_steiner_are_equal(&k, &poly, &union));
        prop_assert_eq!(convex_partition_is_valid_2(&k, poly, &parts), Ok(true));
    }
}
