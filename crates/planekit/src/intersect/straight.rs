//! Half-plane clipper over a base segment.
//!
//! A `Straight` starts as the closed base segment and shrinks monotonically as
//! half-planes are applied with `cut_right_off`. After any sequence of cuts it is
//! empty, a single point, or a sub-segment with the base orientation preserved.

use nalgebra::Point2;

use crate::kernel::{cross, Kernel, Line2, OrientedSide, Segment2};

/// Current extent of the clipped region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipState {
    /// Base segment, no cut has removed anything yet.
    Unclipped,
    Segment,
    Point,
    Empty,
}

/// Concrete clipped region.
#[derive(Clone, Debug, PartialEq)]
pub enum Clipped<N: nalgebra::Scalar> {
    Empty,
    Point(Point2<N>),
    Segment(Segment2<N>),
}

/// Clipper state machine; see module docs.
#[derive(Clone, Debug)]
pub struct Straight<'k, K: Kernel> {
    kernel: &'k K,
    region: Clipped<K::Num>,
    clipped: bool,
}

impl<'k, K: Kernel> Straight<'k, K> {
    /// A zero-length base segment starts out as a point.
    pub fn new(kernel: &'k K, base: &Segment2<K::Num>) -> Self {
        let region = if base.is_degenerate() {
            Clipped::Point(base.start.clone())
        } else {
            Clipped::Segment(base.clone())
        };
        Self {
            kernel,
            region,
            clipped: false,
        }
    }

    pub fn current_state(&self) -> ClipState {
        match &self.region {
            Clipped::Empty => ClipState::Empty,
            Clipped::Point(_) => ClipState::Point,
            Clipped::Segment(_) if self.clipped => ClipState::Segment,
            Clipped::Segment(_) => ClipState::Unclipped,
        }
    }

    /// `Some` only in the `Point` state.
    pub fn current_point(&self) -> Option<Point2<K::Num>> {
        match &self.region {
            Clipped::Point(p) => Some(p.clone()),
            _ => None,
        }
    }

    /// `Some` only in the `Segment`/`Unclipped` states.
    pub fn current_segment(&self) -> Option<Segment2<K::Num>> {
        match &self.region {
            Clipped::Segment(s) => Some(s.clone()),
            _ => None,
        }
    }

    #[inline]
    pub fn region(&self) -> &Clipped<K::Num> {
        &self.region
    }

    #[inline]
    pub fn into_region(self) -> Clipped<K::Num> {
        self.region
    }

    /// Removes the part strictly right of `line`, keeping the closed left half-plane.
    ///
    /// A degenerate line removes nothing.
    pub fn cut_right_off(&mut self, line: &Line2<K::Num>) {
        if line.is_degenerate() {
            return;
        }
        let next = match &self.region {
            Clipped::Empty => return,
            Clipped::Point(p) => match self.kernel.side_of_line(line, p) {
                OrientedSide::Negative => Clipped::Empty,
                _ => return,
            },
            Clipped::Segment(s) => {
                let side_start = self.kernel.side_of_line(line, &s.start);
                let side_end = self.kernel.side_of_line(line, &s.end);
                match (side_start, side_end) {
                    (OrientedSide::Negative, OrientedSide::Negative) => Clipped::Empty,
                    (OrientedSide::Negative, OrientedSide::OnBoundary) => {
                        Clipped::Point(s.end.clone())
                    }
                    (OrientedSide::OnBoundary, OrientedSide::Negative) => {
                        Clipped::Point(s.start.clone())
                    }
                    (OrientedSide::Negative, OrientedSide::Positive) => {
                        match crossing(line, &s.start, &s.end) {
                            Some(x) => shrink(x, s.end.clone()),
                            None => Clipped::Point(s.end.clone()),
                        }
                    }
                    (OrientedSide::Positive, OrientedSide::Negative) => {
                        match crossing(line, &s.end, &s.start) {
                            Some(x) => shrink(s.start.clone(), x),
                            None => Clipped::Point(s.start.clone()),
                        }
                    }
                    _ => return,
                }
            }
        };
        self.region = next;
        self.clipped = true;
    }
}

fn shrink<N: nalgebra::Scalar>(start: Point2<N>, end: Point2<N>) -> Clipped<N> {
    if start == end {
        Clipped::Point(start)
    } else {
        Clipped::Segment(Segment2::new(start, end))
    }
}

/// Point where `out → inside` crosses `line`; `out` is strictly right, `inside` strictly left.
///
/// `None` if the arithmetic cannot separate the two sides (rounding kernels only).
fn crossing<N>(line: &Line2<N>, out: &Point2<N>, inside: &Point2<N>) -> Option<Point2<N>>
where
    N: nalgebra::Scalar + num_traits::Num,
{
    let d_out = cross(&line.p, &line.q, out);
    let d_in = cross(&line.p, &line.q, inside);
    let denom = d_out.clone() - d_in;
    if denom.is_zero() {
        return None;
    }
    let t = d_out / denom;
    let x = out.x.clone() + (inside.x.clone() - out.x.clone()) * t.clone();
    let y = out.y.clone() + (inside.y.clone() - out.y.clone()) * t;
    Some(Point2::new(x, y))
}
