//! Exact planar geometry: segment × triangle intersection and partition validation.
//!
//! Layout
//! - `kernel`: capability trait over number types plus the `Robust` (f64) and
//!   `Exact<T>` kernels, value types and polygon predicates.
//! - `intersect`: half-plane clipper and the memoizing segment × triangle classifier.
//! - `partition`: overlap detection, boundary matching and the validators.
//! - `sample`: deterministic random convex polygons and partitions of them.
//!
//! API Policy
//! - `api` and `prelude` are curated import surfaces; module paths may move.

pub mod api;
pub mod intersect;
pub mod kernel;
pub mod partition;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use kernel::{Exact, Kernel, Point2, Robust};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::intersect::{do_intersect, intersection, Intersection, IntersectionType};
    pub use crate::kernel::{
        Exact, Kernel, Line2, Orientation, OrientedSide, Point2, Robust, Segment2, Triangle2,
    };
    pub use crate::partition::{
        any_partition_is_valid_2, convex_partition_is_valid_2, partition_is_valid_2,
        partition_report, y_monotone_partition_is_valid_2, CheckKind, PartitionError, Verdict,
    };
    pub use crate::sample::{draw_polygon_radial, fan_partition, RadialCfg, ReplayToken};
}
