//! Frontier-growing triangulation of a point grid.
//!
//! Starting from the seed edge `(0, 1)`, every open edge sweeps a growing circle through its
//! endpoints out to each side. The first point the circle swallows closes a triangle, and the
//! two new edges join the frontier unless they are already part of it. The run ends when no
//! unresolved edge is left.

use crate::algorithm::bucket_grid::BucketIndex;
use crate::algorithm::SpatialIndex;
use crate::grid::PointGrid;
use std::collections::HashSet;

pub mod probe;

use probe::{EdgeFrame, Probe, ProbeSettings, Side};

/// Order-independent identity of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }
}

/// An edge between two points of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// Set once both sides have been probed.
    pub resolved: bool,
}

impl Edge {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.a, self.b)
    }
}

/// A triangle referring to three grid points, in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Sorted vertex indices, equal for every winding of the same triangle.
    pub fn key(&self) -> [usize; 3] {
        let mut key = self.vertices();
        key.sort_unstable();
        key
    }

    pub fn edges(&self) -> [EdgeKey; 3] {
        [
            EdgeKey::new(self.a, self.b),
            EdgeKey::new(self.b, self.c),
            EdgeKey::new(self.c, self.a),
        ]
    }

    /// The same triangle with the opposite winding.
    pub fn flipped(&self) -> Self {
        Self { a: self.a, b: self.c, c: self.b }
    }
}

/// Work-list of edges in insertion order.
///
/// Edges are never removed, only marked resolved, so membership doubles as the record of
/// every edge created during the run.
#[derive(Debug, Default)]
pub struct Frontier {
    edges: Vec<Edge>,
    keys: HashSet<EdgeKey>,
    cursor: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frontier holding only the unresolved edge `(a, b)`.
    pub fn seeded(a: usize, b: usize) -> Self {
        let mut frontier = Self::new();
        frontier.push(a, b);
        frontier
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.keys.contains(&EdgeKey::new(a, b))
    }

    /// Adds `(a, b)` as unresolved. Returns `false` if an equal edge was already present.
    pub fn push(&mut self, a: usize, b: usize) -> bool {
        if !self.keys.insert(EdgeKey::new(a, b)) {
            return false;
        }
        self.edges.push(Edge { a, b, resolved: false });
        true
    }

    /// Next unresolved edge and its slot, oldest first.
    pub fn pop(&mut self) -> Option<(usize, Edge)> {
        while let Some(edge) = self.edges.get(self.cursor) {
            if !edge.resolved {
                return Some((self.cursor, *edge));
            }
            self.cursor += 1;
        }
        None
    }

    pub fn resolve(&mut self, slot: usize) {
        self.edges[slot].resolved = true;
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn unresolved(&self) -> usize {
        self.edges[self.cursor.min(self.edges.len())..]
            .iter()
            .filter(|e| !e.resolved)
            .count()
    }
}

/// Counters collected during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriangulationStats {
    pub edges_processed: usize,
    pub boundary_sides: usize,
    pub duplicate_triangles: usize,
    pub degenerate_edges: usize,
}

/// Result of a triangulation run.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub triangles: Vec<Triangle>,
    pub edges: Vec<EdgeKey>,
    pub stats: TriangulationStats,
    /// `false` when the edge budget stopped the run early.
    pub complete: bool,
}

impl Triangulation {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Drives the frontier over a grid using a spatial index.
pub struct Triangulator<'a, A: SpatialIndex> {
    grid: &'a PointGrid,
    index: A,
    settings: ProbeSettings,
    edge_budget: Option<usize>,
}

impl<'a> Triangulator<'a, BucketIndex> {
    /// Creates a triangulator over a freshly built [`BucketIndex`].
    pub fn new(grid: &'a PointGrid) -> Self {
        let index = BucketIndex::with_points(grid.size(), grid.points());
        Self::with_index(grid, index)
    }
}

impl<'a, A: SpatialIndex> Triangulator<'a, A> {
    /// Creates a triangulator over an index already filled with the grid's points.
    pub fn with_index(grid: &'a PointGrid, index: A) -> Self {
        Self {
            grid,
            index,
            settings: ProbeSettings::default(),
            edge_budget: None,
        }
    }

    pub fn with_settings(mut self, settings: ProbeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Caps the number of edges processed; `None` runs to completion.
    pub fn with_edge_budget(mut self, budget: Option<usize>) -> Self {
        self.edge_budget = budget;
        self
    }

    pub fn index(&self) -> &A {
        &self.index
    }

    pub fn run(&self) -> Triangulation {
        let points = self.grid.points();
        let _span = tracing::debug_span!("triangulation", points = points.len()).entered();

        let mut frontier = Frontier::seeded(0, 1);
        let mut triangles = Vec::new();
        let mut emitted: HashSet<[usize; 3]> = HashSet::new();
        let mut stats = TriangulationStats::default();
        let mut complete = true;

        while let Some((slot, edge)) = frontier.pop() {
            if self.edge_budget.is_some_and(|budget| stats.edges_processed >= budget) {
                tracing::warn!(
                    processed = stats.edges_processed,
                    unresolved = frontier.unresolved(),
                    "edge budget exhausted, surface is partial"
                );
                complete = false;
                break;
            }
            stats.edges_processed += 1;

            let Some(frame) = EdgeFrame::new(&points[edge.a], &points[edge.b]) else {
                tracing::warn!(a = edge.a, b = edge.b, "skipping edge with coincident endpoints");
                stats.degenerate_edges += 1;
                frontier.resolve(slot);
                continue;
            };

            for side in Side::BOTH {
                let probe = Probe::new(&self.index, points, [edge.a, edge.b], &frame, side, &self.settings);
                match probe.run() {
                    Some(q) => {
                        let triangle = Triangle::new(edge.a, edge.b, q);
                        if emitted.insert(triangle.key()) {
                            triangles.push(triangle);
                        } else {
                            stats.duplicate_triangles += 1;
                        }
                        frontier.push(q, edge.a);
                        frontier.push(q, edge.b);
                    }
                    None => {
                        tracing::trace!(a = edge.a, b = edge.b, ?side, "boundary side");
                        stats.boundary_sides += 1;
                    }
                }
            }

            frontier.resolve(slot);
        }

        tracing::debug!(
            triangles = triangles.len(),
            edges = frontier.len(),
            boundary_sides = stats.boundary_sides,
            duplicates = stats.duplicate_triangles,
            "triangulation finished"
        );

        Triangulation {
            triangles,
            edges: frontier.edges().iter().map(Edge::key).collect(),
            stats,
            complete,
        }
    }
}

/// Triangulates `grid` with the bucket index and default probe settings.
pub fn triangulate(grid: &PointGrid) -> Triangulation {
    Triangulator::new(grid).run()
}
