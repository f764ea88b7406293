//! Curated API surface (unstable).
//!
//! Prefer these re-exports in binaries and benches so internal module moves stay
//! local to the library.

// Kernel
pub use crate::kernel::{
    cross, is_convex, is_y_monotone, polygon_orientation, signed_area_2x, Exact, Kernel, Line2,
    Orientation, OrientedSide, Point2, Robust, Segment2, Triangle2,
};
// Segment × triangle
pub use crate::intersect::{
    do_intersect, intersection, ClipState, Clipped, Intersection, IntersectionType, Intersects,
    SegmentTrianglePair, Straight, TriangleSegmentPair,
};
// Partition validation
pub use crate::partition::{
    any_partition_is_valid_2, convex_partition_is_valid_2, partition_is_valid_2,
    partition_report, polygons_are_equal, polygons_w_steiner_are_equal,
    y_monotone_partition_is_valid_2, CheckKind, Convex, InvalidReason, PartitionError,
    SubPolygonCheck, UnionBoundary, Vacuous, Verdict, VertexMap, YMonotone,
};
// Sampling
pub use crate::sample::{
    convex_hull, draw_polygon_radial, fan_partition, insert_steiner, snap_to_grid, split_edge,
    RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};
