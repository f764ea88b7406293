//! Subcommand bodies, generic over the kernel chosen by `--exact`.

use anyhow::{anyhow, bail, Context, Result};
use num_rational::BigRational;
use planekit::api::{
    convex_hull, draw_polygon_radial, fan_partition, insert_steiner, partition_report,
    snap_to_grid, CheckKind, Exact, Intersection, Kernel, Point2, PolygonReplay, RadialCfg,
    Segment2, SegmentTrianglePair, Triangle2, VertexCount,
};
use serde_json::{json, Value};

use crate::input::{point, points, raw_point, CoordScalar, IntersectDoc, PartitionDoc};

pub fn validate<K: Kernel>(kernel: &K, doc: &PartitionDoc, check: CheckKind) -> Result<Value>
where
    K::Num: CoordScalar,
{
    let polygon = points::<K>(&doc.polygon).context("reading polygon")?;
    let parts = doc
        .partition
        .iter()
        .enumerate()
        .map(|(i, p)| points::<K>(p).with_context(|| format!("reading sub-polygon {i}")))
        .collect::<Result<Vec<_>>>()?;
    let verdict = partition_report(kernel, polygon, &parts, &check)
        .context("input breaks the partition contract")?;
    tracing::info!(%check, pieces = parts.len(), valid = verdict.is_valid(), "validate");
    Ok(json!({
        "valid": verdict.is_valid(),
        "reason": verdict.reason().map(|r| r.to_string()),
        "check": check.to_string(),
        "pieces": parts.len(),
    }))
}

pub fn intersect<K: Kernel>(kernel: &K, doc: &IntersectDoc) -> Result<Value>
where
    K::Num: CoordScalar,
{
    let seg = Segment2::new(point::<K>(&doc.segment[0])?, point::<K>(&doc.segment[1])?);
    let [a, b, c] = &doc.triangle;
    let tri = Triangle2::new(point::<K>(a)?, point::<K>(b)?, point::<K>(c)?);
    let pair = SegmentTrianglePair::new(kernel, &seg, &tri);
    let (kind, pts) = match pair.result() {
        None => ("disjoint", Vec::new()),
        Some(Intersection::Point(p)) => ("point", vec![raw_point::<K>(p)]),
        Some(Intersection::Segment(s)) => (
            "segment",
            vec![raw_point::<K>(&s.start), raw_point::<K>(&s.end)],
        ),
    };
    tracing::info!(kind, "intersect");
    Ok(json!({ "kind": kind, "points": pts }))
}

#[derive(Clone, Copy, Debug)]
pub struct SampleArgs {
    pub seed: u64,
    pub index: u64,
    pub vertices: usize,
    /// Grid resolution: coordinates are rounded to multiples of `1/scale` times the radius.
    pub scale: f64,
    /// Boundary edges (from vertex 0 on) that receive a Steiner midpoint.
    pub steiner: usize,
}

/// Random convex polygon on an integer grid with its fan partition.
pub fn sample(args: &SampleArgs) -> Result<PartitionDoc> {
    type Q = BigRational;
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(args.vertices),
        ..RadialCfg::default()
    };
    let drawn = draw_polygon_radial(cfg, PolygonReplay::new(args.seed, args.index))
        .ok_or_else(|| anyhow!("draw collapsed to fewer than 3 vertices"))?;
    let k = Exact::<Q>::new();
    let lifted: Vec<Point2<Q>> = snap_to_grid(&drawn, args.scale)
        .iter()
        .map(|p| Point2::new(Q::from_integer(p.x.into()), Q::from_integer(p.y.into())))
        .collect();
    let hull = convex_hull(&k, &lifted);
    if hull.len() < 3 {
        bail!("polygon collapsed on the grid (scale {}), raise --scale", args.scale);
    }
    let mut parts = fan_partition(&hull);
    let n = hull.len();
    for e in 0..args.steiner.min(n) {
        insert_steiner(&mut parts, &hull[e], &hull[(e + 1) % n]);
    }
    tracing::info!(
        seed = args.seed,
        index = args.index,
        vertices = n,
        pieces = parts.len(),
        "sample"
    );
    Ok(PartitionDoc {
        polygon: hull.iter().map(raw_point::<Exact<Q>>).collect(),
        partition: parts
            .iter()
            .map(|p| p.iter().map(raw_point::<Exact<Q>>).collect())
            .collect(),
    })
}
