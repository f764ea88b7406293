//! Random convex polygons and partitions of them (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests, benches and the CLI `sample`
//!   command: a convex polygon, its fan triangulation, and Steiner refinements.
//!
//! Model
//! - Points sit at jittered angles and radii around the origin; their convex hull
//!   is the polygon, so every draw is strictly convex and counter-clockwise.
//! - A `ReplayToken` seeds the RNG, so any draw can be regenerated on its own.
//! - `snap_to_grid` moves a draw onto integer coordinates so it can be lifted into
//!   an exact scalar without rounding surprises.

use std::cmp::Ordering;

use nalgebra::{Point2, Scalar};
use num_traits::Num;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kernel::{Kernel, Orientation, Robust};

/// How many points a draw starts from (at least 3).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

/// Shape of a radial draw around the origin.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Each angle moves by up to this share of the even spacing; at most 0.49 so
    /// neighbours never swap.
    pub angle_jitter: f64,
    /// Each radius is `radius` scaled by a factor in `1 ± radius_jitter`.
    pub radius_jitter: f64,
    pub radius: f64,
    /// Rotate the whole draw by a random angle.
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter: 0.3,
            radius_jitter: 0.25,
            radius: 1.0,
            random_phase: true,
        }
    }
}

/// `(seed, index)` pair naming one draw; equal tokens give equal polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// RNG for this draw; neighbouring indices give unrelated streams.
    pub fn rng(self) -> StdRng {
        let index = splitmix64(self.index.wrapping_add(0x9e3779b97f4a7c15));
        StdRng::seed_from_u64(splitmix64(self.seed ^ index))
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Jittered points in angular order around the origin. Not necessarily convex.
pub fn draw_points_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point2<f64>> {
    use std::f64::consts::TAU;

    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let step = TAU / n as f64;
    let wobble = cfg.angle_jitter.clamp(0.0, 0.49) * step;
    let spread = cfg.radius_jitter.max(0.0);
    let radius = cfg.radius.max(1e-9);
    let phase = if cfg.random_phase {
        rng.gen_range(0.0..TAU)
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + k as f64 * step + rng.gen_range(-wobble..=wobble))
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    angles
        .into_iter()
        .map(|theta| {
            let r = radius * (1.0 + rng.gen_range(-spread..=spread)).max(1e-6);
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

/// Draw a random strictly convex, counter-clockwise polygon.
///
/// May return fewer vertices than requested when jitter pushes points inside
/// the hull. `None` if fewer than three survive.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Point2<f64>>> {
    let hull = convex_hull(&Robust, &draw_points_radial(cfg, tok));
    (hull.len() >= 3).then_some(hull)
}

/// Andrew's monotone chain; strictly convex hull in counter-clockwise order.
///
/// Collinear and duplicate points are dropped. Fewer than three distinct points
/// come back sorted as they are.
pub fn convex_hull<K: Kernel>(kernel: &K, points: &[Point2<K::Num>]) -> Vec<Point2<K::Num>> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| kernel.compare_xy(a, b));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let keeps_left = |chain: &Vec<Point2<K::Num>>, p: &Point2<K::Num>| {
        kernel.orientation(&chain[chain.len() - 2], &chain[chain.len() - 1], p)
            == Orientation::CounterClockwise
    };
    let mut lower: Vec<Point2<K::Num>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && !keeps_left(&lower, p) {
            lower.pop();
        }
        lower.push(p.clone());
    }
    let mut upper: Vec<Point2<K::Num>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && !keeps_left(&upper, p) {
            upper.pop();
        }
        upper.push(p.clone());
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Scale by `scale` and round to the nearest integer lattice point.
///
/// Consecutive duplicates created by rounding are dropped; run the result through
/// `convex_hull` again if strict convexity matters.
pub fn snap_to_grid(points: &[Point2<f64>], scale: f64) -> Vec<Point2<i64>> {
    let mut out: Vec<Point2<i64>> = points
        .iter()
        .map(|p| Point2::new((p.x * scale).round() as i64, (p.y * scale).round() as i64))
        .collect();
    out.dedup();
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Fan triangulation from vertex 0. Valid for convex polygons only.
pub fn fan_partition<N: Scalar>(polygon: &[Point2<N>]) -> Vec<Vec<Point2<N>>> {
    if polygon.len() < 3 {
        return Vec::new();
    }
    (1..polygon.len() - 1)
        .map(|i| vec![polygon[0].clone(), polygon[i].clone(), polygon[i + 1].clone()])
        .collect()
}

#[inline]
fn midpoint<N: Scalar + Num>(a: &Point2<N>, b: &Point2<N>) -> Point2<N> {
    let two = N::one() + N::one();
    Point2::new(
        (a.x.clone() + b.x.clone()) / two.clone(),
        (a.y.clone() + b.y.clone()) / two,
    )
}

/// Insert the midpoint of edge `i → i+1` (cyclic) after vertex `i`.
pub fn split_edge<N: Scalar + Num>(polygon: &mut Vec<Point2<N>>, i: usize) {
    let n = polygon.len();
    if n < 2 {
        return;
    }
    let i = i % n;
    let m = midpoint(&polygon[i], &polygon[(i + 1) % n]);
    polygon.insert(i + 1, m);
}

/// Split the directed edge `a → b` in whichever part carries it.
///
/// Returns the index of the refined part, or `None` if no part has that edge.
pub fn insert_steiner<N: Scalar + Num>(
    parts: &mut [Vec<Point2<N>>],
    a: &Point2<N>,
    b: &Point2<N>,
) -> Option<usize> {
    for (index, part) in parts.iter_mut().enumerate() {
        let n = part.len();
        if let Some(i) = (0..n).find(|&i| &part[i] == a && &part[(i + 1) % n] == b) {
            split_edge(part, i);
            return Some(index);
        }
    }
    None
}
