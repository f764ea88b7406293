//! Vertex incidence structure over the sub-polygons of a partition.
//!
//! Model
//! - Distinct points get dense ids (xy-sorted table); each sub-polygon becomes a
//!   cycle of ids with consecutive duplicates removed.
//! - Every vertex of a counter-clockwise sub-polygon owns an interior wedge: the
//!   counter-clockwise sweep from the direction of its next vertex to the
//!   direction of its previous vertex.
//!
//! Overlap
//! - Two wedges at one vertex overlap iff the start ray of one lies in the
//!   half-open sweep `[start, end)` of the other. Angular order is decided with
//!   orientation and betweenness predicates only, so it is exact.
//! - Edges of different sub-polygons that cross properly also count as overlap.
//! - Otherwise each sub-polygon is ear-clipped and every pair of triangles from
//!   different sub-polygons is tested for a common interior. This catches pieces
//!   nested in another that touch it only at edge interiors.
//!
//! Union boundary
//! - An edge is internal iff its reverse also occurs. The remaining edges are
//!   traced from the first one; at a vertex with several exits the first exit
//!   clockwise from the incoming edge is taken.

use std::cmp::Ordering;

use nalgebra::Point2;

use crate::kernel::{ear_clip, triangle_interiors_overlap, Kernel, Orientation};

/// One sub-polygon passing through a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Incidence {
    pub polygon: usize,
    pub prev: usize,
    pub next: usize,
}

/// Outer boundary traced from the non-shared edges.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionBoundary<N: nalgebra::Scalar> {
    pub vertices: Vec<Point2<N>>,
    /// The trace came back to its first edge.
    pub closed: bool,
    /// Boundary edges the single trace did not reach (holes, disjoint pieces).
    pub untraced_edges: usize,
}

impl<N: nalgebra::Scalar> UnionBoundary<N> {
    /// A single closed loop covering every boundary edge.
    #[inline]
    pub fn is_single_loop(&self) -> bool {
        self.closed && self.untraced_edges == 0
    }
}

pub struct VertexMap<'k, K: Kernel> {
    kernel: &'k K,
    points: Vec<Point2<K::Num>>,
    incidences: Vec<Vec<Incidence>>,
    cycles: Vec<Vec<usize>>,
}

impl<'k, K: Kernel> VertexMap<'k, K> {
    pub fn new<P: AsRef<[Point2<K::Num>]>>(kernel: &'k K, polygons: &[P]) -> Self {
        let mut points: Vec<Point2<K::Num>> = polygons
            .iter()
            .flat_map(|p| p.as_ref().iter().cloned())
            .collect();
        points.sort_by(|a, b| kernel.compare_xy(a, b));
        points.dedup();

        let mut incidences = vec![Vec::new(); points.len()];
        let mut cycles = Vec::with_capacity(polygons.len());
        for (polygon, verts) in polygons.iter().enumerate() {
            let mut ids: Vec<usize> = verts
                .as_ref()
                .iter()
                .filter_map(|p| points.binary_search_by(|q| kernel.compare_xy(q, p)).ok())
                .collect();
            ids.dedup();
            while ids.len() > 1 && ids.first() == ids.last() {
                ids.pop();
            }
            let n = ids.len();
            if n >= 3 {
                for j in 0..n {
                    incidences[ids[j]].push(Incidence {
                        polygon,
                        prev: ids[(j + n - 1) % n],
                        next: ids[(j + 1) % n],
                    });
                }
            }
            cycles.push(ids);
        }
        Self {
            kernel,
            points,
            incidences,
            cycles,
        }
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn point(&self, id: usize) -> &Point2<K::Num> {
        &self.points[id]
    }

    #[inline]
    pub fn incidences(&self, id: usize) -> &[Incidence] {
        &self.incidences[id]
    }

    /// Sub-polygons share interior area (not just boundary).
    pub fn polygons_overlap(&self) -> bool {
        self.fans_interleave() || self.edges_cross() || self.triangles_meet()
    }

    fn fans_interleave(&self) -> bool {
        for (v, incs) in self.incidences.iter().enumerate() {
            for (i, wi) in incs.iter().enumerate() {
                for wj in &incs[i + 1..] {
                    if self.wedge_admits(v, wi, wj.next) || self.wedge_admits(v, wj, wi.next) {
                        tracing::debug!(
                            vertex = v,
                            first = wi.polygon,
                            second = wj.polygon,
                            "interior wedges interleave"
                        );
                        return true;
                    }
                }
            }
        }
        false
    }

    fn edges_cross(&self) -> bool {
        let k = self.kernel;
        for (i, ci) in self.cycles.iter().enumerate() {
            for (j, cj) in self.cycles.iter().enumerate().skip(i + 1) {
                for (a, b) in cycle_edges(ci) {
                    for (c, d) in cycle_edges(cj) {
                        if a == c || a == d || b == c || b == d {
                            continue;
                        }
                        let (pa, pb) = (&self.points[a], &self.points[b]);
                        let (pc, pd) = (&self.points[c], &self.points[d]);
                        let o1 = k.orientation(pa, pb, pc);
                        let o2 = k.orientation(pa, pb, pd);
                        let o3 = k.orientation(pc, pd, pa);
                        let o4 = k.orientation(pc, pd, pb);
                        let proper = [o1, o2, o3, o4].iter().all(|o| !o.is_collinear())
                            && o1 != o2
                            && o3 != o4;
                        if proper {
                            tracing::debug!(first = i, second = j, "sub-polygon edges cross");
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    fn triangles_meet(&self) -> bool {
        let k = self.kernel;
        let tris: Vec<Vec<[usize; 3]>> = self
            .cycles
            .iter()
            .map(|cyc| {
                let pts: Vec<Point2<K::Num>> =
                    cyc.iter().map(|&id| self.points[id].clone()).collect();
                ear_clip(k, &pts)
                    .into_iter()
                    .map(|[a, b, c]| [cyc[a], cyc[b], cyc[c]])
                    .collect()
            })
            .collect();
        let corners = |t: &[usize; 3]| t.map(|id| &self.points[id]);
        for (i, ti) in tris.iter().enumerate() {
            for (j, tj) in tris.iter().enumerate().skip(i + 1) {
                for a in ti {
                    for b in tj {
                        if triangle_interiors_overlap(k, corners(a), corners(b)) {
                            tracing::debug!(first = i, second = j, "sub-polygon interiors meet");
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Ray `v → dir` lies in the half-open sweep of `wedge` at `v`.
    fn wedge_admits(&self, v: usize, wedge: &Incidence, dir: usize) -> bool {
        let p = &self.points;
        self.cmp_ccw_from(&p[v], &p[wedge.next], &p[dir], &p[wedge.prev]) == Ordering::Less
    }

    /// Compares the counter-clockwise angles from ray `v → r` to rays `v → u` and `v → w`.
    fn cmp_ccw_from(
        &self,
        v: &Point2<K::Num>,
        r: &Point2<K::Num>,
        u: &Point2<K::Num>,
        w: &Point2<K::Num>,
    ) -> Ordering {
        let cu = self.angle_class(v, r, u);
        let cw = self.angle_class(v, r, w);
        match cu.cmp(&cw) {
            Ordering::Equal if cu % 2 == 1 => match self.kernel.orientation(v, u, w) {
                Orientation::CounterClockwise => Ordering::Less,
                Orientation::Clockwise => Ordering::Greater,
                Orientation::Collinear => Ordering::Equal,
            },
            o => o,
        }
    }

    /// 0: same ray, 1: (0, π), 2: opposite ray, 3: (π, 2π).
    fn angle_class(&self, v: &Point2<K::Num>, r: &Point2<K::Num>, u: &Point2<K::Num>) -> u8 {
        match self.kernel.orientation(v, r, u) {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => 3,
            Orientation::Collinear => {
                if self.kernel.collinear_are_ordered_along_line(r, v, u) {
                    2
                } else {
                    0
                }
            }
        }
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.incidences[from].iter().any(|inc| inc.next == to)
    }

    /// Traces the outer boundary of the union of all sub-polygons.
    pub fn union_boundary(&self) -> UnionBoundary<K::Num> {
        let mut edges: Vec<(usize, usize)> = Vec::new();
        for cyc in self.cycles.iter().filter(|c| c.len() >= 3) {
            for (u, w) in cycle_edges(cyc) {
                if !self.has_edge(w, u) {
                    edges.push((u, w));
                }
            }
        }
        if edges.is_empty() {
            return UnionBoundary {
                vertices: Vec::new(),
                closed: true,
                untraced_edges: 0,
            };
        }
        let mut exits: Vec<Vec<usize>> = vec![Vec::new(); self.points.len()];
        for (e, &(u, _)) in edges.iter().enumerate() {
            exits[u].push(e);
        }

        let start = 0usize;
        let mut used = vec![false; edges.len()];
        let mut vertices = Vec::new();
        let mut cur = start;
        let closed = loop {
            used[cur] = true;
            let (u, v) = edges[cur];
            vertices.push(self.points[u].clone());
            let (pv, pu) = (&self.points[v], &self.points[u]);
            let next = exits[v]
                .iter()
                .copied()
                .filter(|&e| !used[e] || e == start)
                .max_by(|&e1, &e2| {
                    self.cmp_ccw_from(pv, pu, &self.points[edges[e1].1], &self.points[edges[e2].1])
                });
            match next {
                Some(e) if e == start => break true,
                Some(e) => cur = e,
                None => break false,
            }
        };
        let untraced_edges = used.iter().filter(|u| !**u).count();
        if !closed || untraced_edges > 0 {
            tracing::debug!(closed, untraced_edges, "union boundary is not a single loop");
        }
        UnionBoundary {
            vertices,
            closed,
            untraced_edges,
        }
    }

    /// Vertices of the traced union boundary, in counter-clockwise order.
    pub fn union_vertices(&self) -> Vec<Point2<K::Num>> {
        self.union_boundary().vertices
    }
}

fn cycle_edges(ids: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = ids.len();
    (0..n).map(move |j| (ids[j], ids[(j + 1) % n]))
}
