//! Per-sub-polygon property checks injected into the validator.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point2;

use crate::kernel::{is_convex, is_y_monotone, Kernel};

/// Property every sub-polygon of a partition must have.
pub trait SubPolygonCheck<K: Kernel> {
    fn check(&self, kernel: &K, vertices: &[Point2<K::Num>]) -> bool;
}

impl<K, F> SubPolygonCheck<K> for F
where
    K: Kernel,
    F: Fn(&K, &[Point2<K::Num>]) -> bool,
{
    #[inline]
    fn check(&self, kernel: &K, vertices: &[Point2<K::Num>]) -> bool {
        self(kernel, vertices)
    }
}

/// Accepts every sub-polygon.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vacuous;

#[derive(Clone, Copy, Debug, Default)]
pub struct Convex;

#[derive(Clone, Copy, Debug, Default)]
pub struct YMonotone;

impl<K: Kernel> SubPolygonCheck<K> for Vacuous {
    #[inline]
    fn check(&self, _kernel: &K, _vertices: &[Point2<K::Num>]) -> bool {
        true
    }
}

impl<K: Kernel> SubPolygonCheck<K> for Convex {
    #[inline]
    fn check(&self, kernel: &K, vertices: &[Point2<K::Num>]) -> bool {
        is_convex(kernel, vertices)
    }
}

impl<K: Kernel> SubPolygonCheck<K> for YMonotone {
    #[inline]
    fn check(&self, kernel: &K, vertices: &[Point2<K::Num>]) -> bool {
        is_y_monotone(kernel, vertices)
    }
}

/// Built-in checks selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckKind {
    #[default]
    Vacuous,
    Convex,
    YMonotone,
}

impl<K: Kernel> SubPolygonCheck<K> for CheckKind {
    fn check(&self, kernel: &K, vertices: &[Point2<K::Num>]) -> bool {
        match self {
            CheckKind::Vacuous => Vacuous.check(kernel, vertices),
            CheckKind::Convex => Convex.check(kernel, vertices),
            CheckKind::YMonotone => YMonotone.check(kernel, vertices),
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckKind::Vacuous => "vacuous",
            CheckKind::Convex => "convex",
            CheckKind::YMonotone => "y-monotone",
        };
        f.write_str(name)
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacuous" | "any" => Ok(CheckKind::Vacuous),
            "convex" => Ok(CheckKind::Convex),
            "y-monotone" | "y_monotone" | "monotone" => Ok(CheckKind::YMonotone),
            other => Err(format!("unknown check `{other}` (vacuous, convex, y-monotone)")),
        }
    }
}
