//! Geometric kernel: exact predicates behind a capability trait.
//!
//! Purpose
//! - Every algorithm in this crate is generic over `Kernel`, so the same clipper,
//!   classifier and partition validator run on `f64` with adaptive-precision
//!   predicates (`Robust`) or on exact rationals (`Exact<T>`).
//! - Only `orientation` is required; the remaining predicates have defaults built
//!   from it and from coordinate comparisons, so a kernel stays consistent with
//!   itself.
//!
//! Conventions
//! - Constructions (clip points, hull caps) use `Num` arithmetic and assume a
//!   field. Integer scalars give exact predicates but truncated constructions.
//! - Coordinate comparisons treat incomparable values (NaN) as equal.

mod impls;
mod polygon;
mod types;

pub use impls::{Exact, Robust};
pub use nalgebra::Point2;
pub use polygon::{
    ear_clip, is_convex, is_y_monotone, polygon_orientation, signed_area_2x,
    triangle_interiors_overlap,
};
pub use types::{Line2, Orientation, OrientedSide, Segment2, Triangle2};

use nalgebra::Scalar;
use num_traits::{Num, Zero};
use std::cmp::Ordering;

/// Capability set required from a number representation.
pub trait Kernel {
    type Num: Scalar + Num + PartialOrd;

    /// Turn of `p → q → r`.
    fn orientation(
        &self,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
        r: &Point2<Self::Num>,
    ) -> Orientation;

    #[inline]
    fn side_of_line(&self, line: &Line2<Self::Num>, r: &Point2<Self::Num>) -> OrientedSide {
        if line.is_degenerate() {
            return OrientedSide::OnBoundary;
        }
        self.orientation(&line.p, &line.q, r).into()
    }

    #[inline]
    fn collinear(
        &self,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
        r: &Point2<Self::Num>,
    ) -> bool {
        self.orientation(p, q, r).is_collinear()
    }

    /// `q` lies on the closed stretch between `p` and `r`.
    ///
    /// Pre: the three points are collinear.
    fn collinear_are_ordered_along_line(
        &self,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
        r: &Point2<Self::Num>,
    ) -> bool {
        if p.x < q.x {
            return !(r.x < q.x);
        }
        if q.x < p.x {
            return !(q.x < r.x);
        }
        if p.y < q.y {
            return !(r.y < q.y);
        }
        if q.y < p.y {
            return !(q.y < r.y);
        }
        true
    }

    /// `q` lies strictly between `p` and `r`.
    ///
    /// Pre: the three points are collinear.
    fn collinear_are_strictly_ordered_along_line(
        &self,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
        r: &Point2<Self::Num>,
    ) -> bool {
        if p.x < q.x {
            return q.x < r.x;
        }
        if q.x < p.x {
            return r.x < q.x;
        }
        if p.y < q.y {
            return q.y < r.y;
        }
        if q.y < p.y {
            return r.y < q.y;
        }
        false
    }

    #[inline]
    fn compare_x(&self, p: &Point2<Self::Num>, q: &Point2<Self::Num>) -> Ordering {
        p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn compare_y(&self, p: &Point2<Self::Num>, q: &Point2<Self::Num>) -> Ordering {
        p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal)
    }

    /// Lexicographic: x first, then y.
    #[inline]
    fn compare_xy(&self, p: &Point2<Self::Num>, q: &Point2<Self::Num>) -> Ordering {
        self.compare_x(p, q).then_with(|| self.compare_y(p, q))
    }

    /// Lexicographic: y first, then x.
    #[inline]
    fn compare_yx(&self, p: &Point2<Self::Num>, q: &Point2<Self::Num>) -> Ordering {
        self.compare_y(p, q).then_with(|| self.compare_x(p, q))
    }

    /// Compares the signed distances of `p` and `q` to `line` (positive side = left).
    fn compare_signed_distance_to_line(
        &self,
        line: &Line2<Self::Num>,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
    ) -> Ordering {
        let dx = line.q.x.clone() - line.p.x.clone();
        let dy = line.q.y.clone() - line.p.y.clone();
        let v = dx * (p.y.clone() - q.y.clone()) - dy * (p.x.clone() - q.x.clone());
        v.partial_cmp(&Self::Num::zero()).unwrap_or(Ordering::Equal)
    }

    /// Same as `compare_signed_distance_to_line` for the line through `a → b`.
    #[inline]
    fn compare_signed_distance_to_line_pts(
        &self,
        a: &Point2<Self::Num>,
        b: &Point2<Self::Num>,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
    ) -> Ordering {
        self.compare_signed_distance_to_line(&Line2::through(a, b), p, q)
    }

    #[inline]
    fn has_smaller_signed_distance_to_line(
        &self,
        line: &Line2<Self::Num>,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
    ) -> bool {
        self.compare_signed_distance_to_line(line, p, q) == Ordering::Less
    }

    #[inline]
    fn has_larger_signed_distance_to_line(
        &self,
        line: &Line2<Self::Num>,
        p: &Point2<Self::Num>,
        q: &Point2<Self::Num>,
    ) -> bool {
        self.compare_signed_distance_to_line(line, p, q) == Ordering::Greater
    }
}

/// `(q - p) × (r - p)`: twice the signed area of `p, q, r`.
#[inline]
pub fn cross<N: Scalar + Num>(p: &Point2<N>, q: &Point2<N>, r: &Point2<N>) -> N {
    let ux = q.x.clone() - p.x.clone();
    let uy = q.y.clone() - p.y.clone();
    let vx = r.x.clone() - p.x.clone();
    let vy = r.y.clone() - p.y.clone();
    ux * vy - uy * vx
}

#[inline]
pub(crate) fn orientation_of_sign<N: Num + PartialOrd>(det: N) -> Orientation {
    let zero = N::zero();
    if det > zero {
        Orientation::CounterClockwise
    } else if det < zero {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
