//! Partition validity: overlap, per-piece property, and boundary faithfulness.

use nalgebra::Point2;

use super::checks::{Convex, SubPolygonCheck, Vacuous, YMonotone};
use super::circular::{polygons_are_equal, polygons_w_steiner_are_equal};
use super::vertex_map::VertexMap;
use super::{InvalidReason, PartitionError, Verdict};
use crate::kernel::{polygon_orientation, Kernel, Orientation};

/// Full verdict with the reason for rejection.
///
/// Steps, short-circuiting on the first failure:
/// 1. empty partition: valid iff the original is empty too;
/// 2. original must be a counter-clockwise polygon (else `Err`);
/// 3. every sub-polygon must be counter-clockwise with >= 3 vertices (else `Err`);
/// 4. no two sub-polygons may overlap;
/// 5. every sub-polygon must pass `check`;
/// 6. the union boundary must be one loop equal to the original, exactly when the
///    vertex counts agree and up to Steiner vertices otherwise.
pub fn partition_report<K, I, P, C>(
    kernel: &K,
    points: I,
    polygons: &[P],
    check: &C,
) -> Result<Verdict, PartitionError>
where
    K: Kernel,
    I: IntoIterator<Item = Point2<K::Num>>,
    P: AsRef<[Point2<K::Num>]>,
    C: SubPolygonCheck<K> + ?Sized,
{
    let orig: Vec<Point2<K::Num>> = points.into_iter().collect();
    if polygons.is_empty() {
        return Ok(if orig.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid(InvalidReason::EmptyPartition)
        });
    }
    if orig.len() < 3 {
        return Err(PartitionError::TooFewVertices(orig.len()));
    }
    if polygon_orientation(kernel, &orig) != Orientation::CounterClockwise {
        return Err(PartitionError::NotCounterClockwise);
    }
    for (index, poly) in polygons.iter().enumerate() {
        let verts = poly.as_ref();
        if verts.len() < 3 {
            return Err(PartitionError::SubPolygonTooFewVertices {
                index,
                len: verts.len(),
            });
        }
        if polygon_orientation(kernel, verts) != Orientation::CounterClockwise {
            return Err(PartitionError::SubPolygonNotCounterClockwise { index });
        }
    }

    let map = VertexMap::new(kernel, polygons);
    if map.polygons_overlap() {
        tracing::debug!(polygons = polygons.len(), "sub-polygons overlap");
        return Ok(Verdict::Invalid(InvalidReason::Overlap));
    }

    for (index, poly) in polygons.iter().enumerate() {
        if !check.check(kernel, poly.as_ref()) {
            tracing::debug!(index, "sub-polygon lacks the tested property");
            return Ok(Verdict::Invalid(InvalidReason::CheckFailed { index }));
        }
    }

    let union = map.union_boundary();
    if !union.is_single_loop() {
        return Ok(Verdict::Invalid(InvalidReason::BoundaryNotClosed));
    }
    let matched = if union.vertices.len() == orig.len() {
        polygons_are_equal(&orig, &union.vertices)
    } else {
        polygons_w_steiner_are_equal(kernel, &orig, &union.vertices)
    };
    tracing::debug!(
        original = orig.len(),
        union = union.vertices.len(),
        matched,
        "boundary comparison"
    );
    Ok(if matched {
        Verdict::Valid
    } else {
        Verdict::Invalid(InvalidReason::BoundaryMismatch)
    })
}

/// `partition_report` reduced to a boolean; `check` is injected per sub-polygon.
pub fn partition_is_valid_2<K, I, P, C>(
    kernel: &K,
    points: I,
    polygons: &[P],
    check: &C,
) -> Result<bool, PartitionError>
where
    K: Kernel,
    I: IntoIterator<Item = Point2<K::Num>>,
    P: AsRef<[Point2<K::Num>]>,
    C: SubPolygonCheck<K> + ?Sized,
{
    partition_report(kernel, points, polygons, check).map(|v| v.is_valid())
}

/// Any decomposition: no per-piece property.
pub fn any_partition_is_valid_2<K, I, P>(
    kernel: &K,
    points: I,
    polygons: &[P],
) -> Result<bool, PartitionError>
where
    K: Kernel,
    I: IntoIterator<Item = Point2<K::Num>>,
    P: AsRef<[Point2<K::Num>]>,
{
    partition_is_valid_2(kernel, points, polygons, &Vacuous)
}

pub fn convex_partition_is_valid_2<K, I, P>(
    kernel: &K,
    points: I,
    polygons: &[P],
) -> Result<bool, PartitionError>
where
    K: Kernel,
    I: IntoIterator<Item = Point2<K::Num>>,
    P: AsRef<[Point2<K::Num>]>,
{
    partition_is_valid_2(kernel, points, polygons, &Convex)
}

pub fn y_monotone_partition_is_valid_2<K, I, P>(
    kernel: &K,
    points: I,
    polygons: &[P],
) -> Result<bool, PartitionError>
where
    K: Kernel,
    I: IntoIterator<Item = Point2<K::Num>>,
    P: AsRef<[Point2<K::Num>]>,
{
    partition_is_valid_2(kernel, points, polygons, &YMonotone)
}
