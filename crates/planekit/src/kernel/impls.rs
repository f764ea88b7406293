//! Concrete kernels.
//!
//! - `Robust`: `f64` coordinates with Shewchuk's adaptive-precision `orient2d`.
//! - `Exact<T>`: any exact scalar; orientation is the sign of the exact determinant.

use std::fmt;
use std::marker::PhantomData;

use nalgebra::{Point2, Scalar};
use num_traits::Num;
use robust::{orient2d, Coord};

use super::{cross, orientation_of_sign, Kernel, Orientation};

/// `f64` kernel. Predicates are exact; constructions round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Robust;

impl Kernel for Robust {
    type Num = f64;

    #[inline]
    fn orientation(&self, p: &Point2<f64>, q: &Point2<f64>, r: &Point2<f64>) -> Orientation {
        let det = orient2d(
            Coord { x: p.x, y: p.y },
            Coord { x: q.x, y: q.y },
            Coord { x: r.x, y: r.y },
        );
        orientation_of_sign(det)
    }
}

/// Kernel over an exact scalar such as `num_rational::Rational64` or `BigRational`.
pub struct Exact<T>(PhantomData<fn() -> T>);

impl<T> Exact<T> {
    #[inline]
    pub const fn new() -> Self {
        Exact(PhantomData)
    }
}

impl<T> Default for Exact<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Exact<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Exact<T> {}

impl<T> fmt::Debug for Exact<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exact<{}>", std::any::type_name::<T>())
    }
}

impl<T: Scalar + Num + PartialOrd> Kernel for Exact<T> {
    type Num = T;

    #[inline]
    fn orientation(&self, p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> Orientation {
        orientation_of_sign(cross(p, q, r))
    }
}
