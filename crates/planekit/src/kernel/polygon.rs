//! Predicates on polygon vertex sequences (cyclic, no repeated closing vertex).

use std::cmp::Ordering;

use nalgebra::Point2;

use super::{Kernel, Orientation};

/// Orientation of a simple polygon, read at its xy-smallest vertex.
///
/// Fewer than three vertices, or a flat polygon, gives `Collinear`.
pub fn polygon_orientation<K: Kernel>(kernel: &K, pts: &[Point2<K::Num>]) -> Orientation {
    let n = pts.len();
    if n < 3 {
        return Orientation::Collinear;
    }
    let mut i_min = 0usize;
    for (i, p) in pts.iter().enumerate().skip(1) {
        if kernel.compare_xy(p, &pts[i_min]) == Ordering::Less {
            i_min = i;
        }
    }
    let prev = &pts[(i_min + n - 1) % n];
    let next = &pts[(i_min + 1) % n];
    kernel.orientation(prev, &pts[i_min], next)
}

/// Convexity test tolerant of collinear (Steiner) vertices.
///
/// All proper turns must agree, collinear vertices must continue forward, and the
/// boundary must wind exactly once (two xy-direction changes around the cycle).
pub fn is_convex<K: Kernel>(kernel: &K, pts: &[Point2<K::Num>]) -> bool {
    let n = pts.len();
    if n < 3 {
        return false;
    }
    let mut turn: Option<Orientation> = None;
    for i in 0..n {
        let p = &pts[i];
        let q = &pts[(i + 1) % n];
        let r = &pts[(i + 2) % n];
        match kernel.orientation(p, q, r) {
            Orientation::Collinear => {
                if !kernel.collinear_are_ordered_along_line(p, q, r) {
                    return false;
                }
            }
            o => match turn {
                None => turn = Some(o),
                Some(t) if t != o => return false,
                _ => {}
            },
        }
    }
    turn.is_some() && direction_changes(pts, |p, q| kernel.compare_xy(p, q)) == 2
}

/// Boundary splits into two chains monotone in y (ties broken by x).
pub fn is_y_monotone<K: Kernel>(kernel: &K, pts: &[Point2<K::Num>]) -> bool {
    if pts.len() < 3 {
        return false;
    }
    direction_changes(pts, |p, q| kernel.compare_yx(p, q)) <= 2
}

/// Twice the signed area (shoelace); positive for counter-clockwise input.
pub fn signed_area_2x<N>(pts: &[Point2<N>]) -> N
where
    N: nalgebra::Scalar + num_traits::Num,
{
    let n = pts.len();
    let mut acc = N::zero();
    for i in 0..n {
        let p = &pts[i];
        let q = &pts[(i + 1) % n];
        acc = acc + (p.x.clone() * q.y.clone() - q.x.clone() * p.y.clone());
    }
    acc
}

/// Ear-clipping triangulation of a simple counter-clockwise polygon.
///
/// Returns index triples into `pts`, each a counter-clockwise triangle of positive
/// area. Collinear vertices are dropped without emitting a triangle. On input that
/// is not simple the clipping can stall; the triangles found so far are returned.
pub fn ear_clip<K: Kernel>(kernel: &K, pts: &[Point2<K::Num>]) -> Vec<[usize; 3]> {
    let mut ring: Vec<usize> = (0..pts.len()).collect();
    let mut out = Vec::with_capacity(pts.len().saturating_sub(2));
    let mut i = 0usize;
    let mut stalled = 0usize;
    while ring.len() >= 3 {
        let n = ring.len();
        let at = i % n;
        let (a, b, c) = (ring[(at + n - 1) % n], ring[at], ring[(at + 1) % n]);
        let clip = match kernel.orientation(&pts[a], &pts[b], &pts[c]) {
            Orientation::Collinear => true,
            Orientation::CounterClockwise if is_ear(kernel, pts, &ring, [a, b, c]) => {
                out.push([a, b, c]);
                true
            }
            _ => false,
        };
        if clip {
            ring.remove(at);
            // the previous vertex lost a neighbour; look at it again
            i = at.saturating_sub(1);
            stalled = 0;
        } else {
            i = at + 1;
            stalled += 1;
            if stalled > n {
                tracing::debug!(left = n, "ear clipping stalled on a non-simple polygon");
                break;
            }
        }
    }
    out
}

/// No other ring vertex lies in the closed triangle `a, b, c`.
fn is_ear<K: Kernel>(
    kernel: &K,
    pts: &[Point2<K::Num>],
    ring: &[usize],
    tri: [usize; 3],
) -> bool {
    let [a, b, c] = tri;
    let (pa, pb, pc) = (&pts[a], &pts[b], &pts[c]);
    ring.iter()
        .filter(|&&v| v != a && v != b && v != c)
        .map(|&v| &pts[v])
        .filter(|p| *p != pa && *p != pb && *p != pc)
        .all(|p| {
            kernel.orientation(pa, pb, p).is_cw()
                || kernel.orientation(pb, pc, p).is_cw()
                || kernel.orientation(pc, pa, p).is_cw()
        })
}

/// Open interiors of two counter-clockwise, non-degenerate triangles meet.
///
/// Two convex polygons have disjoint interiors iff one of their edge lines has
/// the other polygon entirely on its closed right side.
pub fn triangle_interiors_overlap<K: Kernel>(
    kernel: &K,
    t: [&Point2<K::Num>; 3],
    u: [&Point2<K::Num>; 3],
) -> bool {
    let separates = |e: [&Point2<K::Num>; 3], other: [&Point2<K::Num>; 3]| {
        (0..3).any(|i| {
            let (p, q) = (e[i], e[(i + 1) % 3]);
            other.iter().all(|r| !kernel.orientation(p, q, r).is_ccw())
        })
    };
    !separates(t, u) && !separates(u, t)
}

/// Number of sign flips of `cmp(v_i, v_{i+1})` around the cycle, ignoring ties.
fn direction_changes<P, F>(pts: &[P], cmp: F) -> usize
where
    F: Fn(&P, &P) -> Ordering,
{
    let n = pts.len();
    let dirs: Vec<Ordering> = (0..n)
        .map(|i| cmp(&pts[i], &pts[(i + 1) % n]))
        .filter(|o| *o != Ordering::Equal)
        .collect();
    let m = dirs.len();
    (0..m).filter(|&i| dirs[i] != dirs[(i + 1) % m]).count()
}
