//! Validation of polygon partitions.
//!
//! Purpose
//! - Decide whether a set of sub-polygons is a faithful decomposition of a source
//!   polygon: pieces do not overlap, each has the requested property (convex,
//!   y-monotone, or none), and together they reproduce the source boundary,
//!   possibly with extra Steiner vertices on its edges.
//!
//! Layout
//! - `vertex_map`: incidence structure, overlap detection, union boundary.
//! - `circular`: rotation-invariant boundary matchers (exact and Steiner-tolerant).
//! - `checks`: injectable per-piece properties.
//! - `validate`: the orchestrating entry points.
//!
//! Errors vs. verdicts
//! - `Err(PartitionError)` means the caller broke a precondition (orientation,
//!   vertex counts). `Ok(false)` / `Verdict::Invalid` is a normal finding.

mod checks;
mod circular;
mod validate;
mod vertex_map;

use std::fmt;

pub use checks::{CheckKind, Convex, SubPolygonCheck, Vacuous, YMonotone};
pub use circular::{polygons_are_equal, polygons_w_steiner_are_equal, Cursor};
pub use validate::{
    any_partition_is_valid_2, convex_partition_is_valid_2, partition_is_valid_2,
    partition_report, y_monotone_partition_is_valid_2,
};
pub use vertex_map::{Incidence, UnionBoundary, VertexMap};

/// Caller-contract breaches; distinct from an invalid partition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("original polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("original polygon is not counter-clockwise")]
    NotCounterClockwise,
    #[error("sub-polygon {index} needs at least 3 vertices, got {len}")]
    SubPolygonTooFewVertices { index: usize, len: usize },
    #[error("sub-polygon {index} is not counter-clockwise")]
    SubPolygonNotCounterClockwise { index: usize },
}

/// Why a well-formed partition was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// No sub-polygons for a non-empty original.
    EmptyPartition,
    Overlap,
    CheckFailed { index: usize },
    /// Non-shared edges do not form one closed loop.
    BoundaryNotClosed,
    BoundaryMismatch,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::EmptyPartition => {
                f.write_str("empty partition of a non-empty polygon")
            }
            InvalidReason::Overlap => f.write_str("sub-polygons overlap"),
            InvalidReason::CheckFailed { index } => {
                write!(f, "sub-polygon {index} lacks the required property")
            }
            InvalidReason::BoundaryNotClosed => {
                f.write_str("union boundary is not a single loop")
            }
            InvalidReason::BoundaryMismatch => {
                f.write_str("union boundary differs from the original")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Valid,
    Invalid(InvalidReason),
}

impl Verdict {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
    #[inline]
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(r) => Some(*r),
        }
    }
}

#[cfg(test)]
mod tests;
