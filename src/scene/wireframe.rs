use crate::procedural;
use glamx::{Vec2, Vec3};
use std::ops::Range;

/// A line between two vertices, referenced by their index in the vertex table.
pub type Edge = [u32; 2];

/// Geometric description of a wireframe: a vertex table and the edges drawn between
/// its vertices.
///
/// A `Wireframe` is immutable. Build one with a [`WireframeBuilder`], which guarantees
/// that every edge references an existing vertex.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Wireframe {
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl Wireframe {
    /// The vertex table.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices[..]
    }

    /// The edge table.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges[..]
    }

    /// Iterates over the endpoints of every edge, in edge-table order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(move |&[a, b]| (self.vertices[a as usize], self.vertices[b as usize]))
    }
}

/// Append-only builder of a [`Wireframe`].
///
/// The builder owns the index of the next free vertex. Every append returns the indices
/// it assigned, so callers never compute vertex indices by hand.
#[derive(Clone, Debug, Default)]
pub struct WireframeBuilder {
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl WireframeBuilder {
    /// Creates an empty builder.
    pub fn new() -> WireframeBuilder {
        WireframeBuilder::default()
    }

    #[inline]
    fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Appends vertices in order and returns the range of indices they received.
    pub fn append_vertices<I: IntoIterator<Item = Vec3>>(&mut self, vertices: I) -> Range<u32> {
        let start = self.next_index();
        self.vertices.extend(vertices);
        start..self.next_index()
    }

    /// Appends edges in order.
    ///
    /// Edges may reference vertices that are appended later; dangling indices are
    /// rejected by [`build`](Self::build).
    pub fn append_edges(&mut self, edges: &[Edge]) {
        self.edges.extend_from_slice(edges);
    }

    /// Appends a ring and the lines closing it into a loop.
    ///
    /// The 2D ring points `(u, v)` become the vertices `(offset.x, offset.y + u, offset.z + v)`,
    /// so the ring lies in a plane orthogonal to the `x` axis.
    ///
    /// If `with_rungs` is set, each point is also linked to the point with the same
    /// position in the ring appended right after this one. That next ring must have the
    /// same number of points.
    ///
    /// Returns the range of indices the ring vertices received.
    pub fn append_ring(&mut self, points: &[Vec2], offset: Vec3, with_rungs: bool) -> Range<u32> {
        let range = self.append_vertices(
            points
                .iter()
                .map(|p| Vec3::new(offset.x, offset.y + p.x, offset.z + p.y)),
        );

        procedural::push_ring_edges(range.start, points.len() as u32, with_rungs, &mut self.edges);

        range
    }

    /// Freezes the tables into a [`Wireframe`].
    ///
    /// # Panics
    /// Panics if an edge references a vertex that was never appended.
    pub fn build(self) -> Wireframe {
        let nvertices = self.next_index();

        if let Some(edge) = self
            .edges
            .iter()
            .find(|edge| edge.iter().any(|&i| i >= nvertices))
        {
            panic!(
                "Edge {:?} references a missing vertex: the wireframe has {} vertices.",
                edge, nvertices
            );
        }

        Wireframe {
            vertices: self.vertices,
            edges: self.edges,
        }
    }
}
