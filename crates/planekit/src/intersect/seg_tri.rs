//! Segment × triangle classification on top of the clipper.
//!
//! The segment is clipped against the three edge half-planes of the triangle,
//! each taken with the orientation that makes its kept (left) side face the
//! interior. The outcome is computed at most once per pair and cached.

use std::cell::OnceCell;

use nalgebra::Point2;

use super::straight::{Clipped, Straight};
use crate::kernel::{Kernel, Line2, Orientation, Segment2, Triangle2};

/// Classification tag of a pairwise intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    Disjoint,
    Point,
    Segment,
}

/// Non-empty intersection of a segment and a triangle.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection<N: nalgebra::Scalar> {
    Point(Point2<N>),
    Segment(Segment2<N>),
}

impl<N: nalgebra::Scalar> Intersection<N> {
    #[inline]
    pub fn kind(&self) -> IntersectionType {
        match self {
            Intersection::Point(_) => IntersectionType::Point,
            Intersection::Segment(_) => IntersectionType::Segment,
        }
    }
}

/// Lazily classified segment/triangle pair over borrowed shapes.
///
/// The cache is written once, on the first query. The pair is `!Sync`; use one
/// instance per pair when classifying from several threads.
pub struct SegmentTrianglePair<'a, K: Kernel> {
    kernel: &'a K,
    seg: &'a Segment2<K::Num>,
    tri: &'a Triangle2<K::Num>,
    result: OnceCell<Option<Intersection<K::Num>>>,
}

impl<'a, K: Kernel> SegmentTrianglePair<'a, K> {
    pub fn new(kernel: &'a K, seg: &'a Segment2<K::Num>, tri: &'a Triangle2<K::Num>) -> Self {
        Self {
            kernel,
            seg,
            tri,
            result: OnceCell::new(),
        }
    }

    /// True once the classification has run.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.result.get().is_some()
    }

    /// Cached intersection; `None` for disjoint shapes.
    pub fn result(&self) -> Option<&Intersection<K::Num>> {
        self.result.get_or_init(|| self.classify()).as_ref()
    }

    pub fn intersection_type(&self) -> IntersectionType {
        self.result().map_or(IntersectionType::Disjoint, Intersection::kind)
    }

    /// The intersection point if the tag is `Point`.
    pub fn intersection_point(&self) -> Option<Point2<K::Num>> {
        match self.result() {
            Some(Intersection::Point(p)) => Some(p.clone()),
            _ => None,
        }
    }

    /// The overlap segment if the tag is `Segment`.
    pub fn intersection_segment(&self) -> Option<Segment2<K::Num>> {
        match self.result() {
            Some(Intersection::Segment(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn classify(&self) -> Option<Intersection<K::Num>> {
        let [a, b, c] = &self.tri.vertices;
        let mut straight = Straight::new(self.kernel, self.seg);
        match self.kernel.orientation(a, b, c) {
            Orientation::CounterClockwise => {
                straight.cut_right_off(&Line2::through(a, b));
                straight.cut_right_off(&Line2::through(b, c));
                straight.cut_right_off(&Line2::through(c, a));
            }
            Orientation::Clockwise => {
                straight.cut_right_off(&Line2::through(c, b));
                straight.cut_right_off(&Line2::through(b, a));
                straight.cut_right_off(&Line2::through(a, c));
            }
            Orientation::Collinear => return self.classify_flat(),
        }
        tracing::trace!(state = ?straight.current_state(), "segment/triangle clipped");
        from_clipped(straight.into_region())
    }

    /// Flat triangle: intersect with its hull, a segment or a single point.
    fn classify_flat(&self) -> Option<Intersection<K::Num>> {
        let k = self.kernel;
        let verts = &self.tri.vertices;
        let mut lo = &verts[0];
        let mut hi = &verts[0];
        for v in &verts[1..] {
            if k.compare_xy(v, lo).is_lt() {
                lo = v;
            }
            if k.compare_xy(v, hi).is_gt() {
                hi = v;
            }
        }
        let (s, e) = (&self.seg.start, &self.seg.end);
        if lo == hi {
            let on_segment = k.collinear(s, lo, e) && k.collinear_are_ordered_along_line(s, lo, e);
            return on_segment.then(|| Intersection::Point(lo.clone()));
        }
        // Keep the supporting line, then cap it at both hull ends.
        let dx = hi.x.clone() - lo.x.clone();
        let dy = hi.y.clone() - lo.y.clone();
        let cap_lo = Point2::new(lo.x.clone() + dy.clone(), lo.y.clone() - dx.clone());
        let cap_hi = Point2::new(hi.x.clone() - dy, hi.y.clone() + dx);
        let mut straight = Straight::new(k, self.seg);
        straight.cut_right_off(&Line2::through(lo, hi));
        straight.cut_right_off(&Line2::through(hi, lo));
        straight.cut_right_off(&Line2::through(lo, &cap_lo));
        straight.cut_right_off(&Line2::through(hi, &cap_hi));
        from_clipped(straight.into_region())
    }
}

fn from_clipped<N: nalgebra::Scalar>(region: Clipped<N>) -> Option<Intersection<N>> {
    match region {
        Clipped::Empty => None,
        Clipped::Point(p) => Some(Intersection::Point(p)),
        Clipped::Segment(s) => Some(Intersection::Segment(s)),
    }
}

/// Triangle-first view of the same classification; roles are swapped, not re-derived.
pub struct TriangleSegmentPair<'a, K: Kernel> {
    inner: SegmentTrianglePair<'a, K>,
}

impl<'a, K: Kernel> TriangleSegmentPair<'a, K> {
    pub fn new(kernel: &'a K, tri: &'a Triangle2<K::Num>, seg: &'a Segment2<K::Num>) -> Self {
        Self {
            inner: SegmentTrianglePair::new(kernel, seg, tri),
        }
    }
    #[inline]
    pub fn result(&self) -> Option<&Intersection<K::Num>> {
        self.inner.result()
    }
    #[inline]
    pub fn intersection_type(&self) -> IntersectionType {
        self.inner.intersection_type()
    }
    #[inline]
    pub fn intersection_point(&self) -> Option<Point2<K::Num>> {
        self.inner.intersection_point()
    }
    #[inline]
    pub fn intersection_segment(&self) -> Option<Segment2<K::Num>> {
        self.inner.intersection_segment()
    }
}

/// Pairwise intersection queries between two shape types.
pub trait Intersects<Rhs, K: Kernel> {
    fn intersection_with(&self, kernel: &K, other: &Rhs) -> Option<Intersection<K::Num>>;

    fn do_intersect_with(&self, kernel: &K, other: &Rhs) -> bool;
}

impl<K: Kernel> Intersects<Triangle2<K::Num>, K> for Segment2<K::Num> {
    fn intersection_with(
        &self,
        kernel: &K,
        tri: &Triangle2<K::Num>,
    ) -> Option<Intersection<K::Num>> {
        SegmentTrianglePair::new(kernel, self, tri).result().cloned()
    }

    fn do_intersect_with(&self, kernel: &K, tri: &Triangle2<K::Num>) -> bool {
        SegmentTrianglePair::new(kernel, self, tri).intersection_type()
            != IntersectionType::Disjoint
    }
}

impl<K: Kernel> Intersects<Segment2<K::Num>, K> for Triangle2<K::Num> {
    fn intersection_with(
        &self,
        kernel: &K,
        seg: &Segment2<K::Num>,
    ) -> Option<Intersection<K::Num>> {
        TriangleSegmentPair::new(kernel, self, seg).result().cloned()
    }

    fn do_intersect_with(&self, kernel: &K, seg: &Segment2<K::Num>) -> bool {
        TriangleSegmentPair::new(kernel, self, seg).intersection_type()
            != IntersectionType::Disjoint
    }
}

/// True iff `a` and `b` share at least one point.
#[inline]
pub fn do_intersect<K, A, B>(kernel: &K, a: &A, b: &B) -> bool
where
    K: Kernel,
    A: Intersects<B, K>,
{
    a.do_intersect_with(kernel, b)
}

/// Intersection of `a` and `b`, `None` if disjoint.
#[inline]
pub fn intersection<K, A, B>(kernel: &K, a: &A, b: &B) -> Option<Intersection<K::Num>>
where
    K: Kernel,
    A: Intersects<B, K>,
{
    a.intersection_with(kernel, b)
}
