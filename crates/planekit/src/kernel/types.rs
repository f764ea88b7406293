//! Value types consumed by the kernel predicates.
//!
//! - `Orientation`, `OrientedSide`: predicate outcomes.
//! - `Line2`: oriented line through two points (positive side = left).
//! - `Segment2`, `Triangle2`: closed point sets given by their vertices.
//!
//! Points are `nalgebra::Point2<N>` so callers can feed coordinates straight from
//! nalgebra code; polygons are plain vertex slices in boundary order.

use nalgebra::{Point2, Scalar};

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }
    #[inline]
    pub fn is_cw(self) -> bool {
        matches!(self, Orientation::Clockwise)
    }
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Side of an oriented line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrientedSide {
    Negative,
    OnBoundary,
    Positive,
}

impl From<Orientation> for OrientedSide {
    #[inline]
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::CounterClockwise => OrientedSide::Positive,
            Orientation::Clockwise => OrientedSide::Negative,
            Orientation::Collinear => OrientedSide::OnBoundary,
        }
    }
}

/// Oriented line through `p` towards `q`.
///
/// The positive side is to the left of `p → q`. A line with `p == q` is
/// degenerate: every point is reported as on the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Line2<N: Scalar> {
    pub p: Point2<N>,
    pub q: Point2<N>,
}

impl<N: Scalar> Line2<N> {
    #[inline]
    pub fn new(p: Point2<N>, q: Point2<N>) -> Self {
        Self { p, q }
    }
    #[inline]
    pub fn through(p: &Point2<N>, q: &Point2<N>) -> Self {
        Self::new(p.clone(), q.clone())
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p == self.q
    }
    /// Same point set, opposite orientation.
    #[inline]
    pub fn opposite(&self) -> Self {
        Self::new(self.q.clone(), self.p.clone())
    }
}

/// Closed segment from `start` to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment2<N: Scalar> {
    pub start: Point2<N>,
    pub end: Point2<N>,
}

impl<N: Scalar> Segment2<N> {
    #[inline]
    pub fn new(start: Point2<N>, end: Point2<N>) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
    #[inline]
    pub fn opposite(&self) -> Self {
        Self::new(self.end.clone(), self.start.clone())
    }
    #[inline]
    pub fn supporting_line(&self) -> Line2<N> {
        Line2::through(&self.start, &self.end)
    }
}

/// Closed triangle; vertex order (CW or CCW) is not normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle2<N: Scalar> {
    pub vertices: [Point2<N>; 3],
}

impl<N: Scalar> Triangle2<N> {
    #[inline]
    pub fn new(a: Point2<N>, b: Point2<N>, c: Point2<N>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
    /// Vertex `i` modulo 3.
    #[inline]
    pub fn vertex(&self, i: usize) -> &Point2<N> {
        &self.vertices[i % 3]
    }
}
