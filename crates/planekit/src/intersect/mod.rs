//! Pairwise shape intersection (segment × triangle) via half-plane clipping.
//!
//! - `straight`: the clipper (`Straight`) reducing a segment against half-planes.
//! - `seg_tri`: memoizing classifier (`SegmentTrianglePair`), its triangle-first
//!   view, and the `do_intersect` / `intersection` entry points.
//!
//! All results are exact when the kernel's scalar is exact.

mod seg_tri;
mod straight;

pub use seg_tri::{
    do_intersect, intersection, Intersection, IntersectionType, Intersects, SegmentTrianglePair,
    TriangleSegmentPair,
};
pub use straight::{ClipState, Clipped, Straight};
