mod flags;

use std::{collections::BTreeMap, fmt::Debug};

use derivative::Derivative;

pub use self::flags::FlagMatrix;
use crate::{
    Degree, Directedness, Edge, GraphStore, Vertex, debug::format_debug, tracing_support::trace,
};

/// A graph stored as an ordered list of vertices and a square matrix of edge
/// flags indexed by vertex position.
///
/// The flag at `(i, j)` is set iff there is an edge from `vertices[i]` to
/// `vertices[j]`.  Edge checks are constant time once both indices are known;
/// finding an index is a linear scan of the vertex list.  Adding or removing a
/// vertex rebuilds the matrix, so both are quadratic in the vertex count.
/// Neighbors are returned in vertex insertion order.
#[derive(Derivative)]
#[derivative(Clone(bound = "V: Clone"), Default(bound = ""))]
pub struct AdjacencyMatrixStore<V> {
    /// Invariant: `vertices.len() == flags.size()`, and no vertex appears
    /// twice.
    vertices: Vec<V>,
    flags: FlagMatrix,
}

impl<V: Vertex> AdjacencyMatrixStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vertices in index order; the position of a vertex here is its row
    /// and column in [`Self::flags`].
    pub fn vertex_order(&self) -> &[V] {
        &self.vertices
    }

    pub fn flags(&self) -> &FlagMatrix {
        &self.flags
    }

    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    /// Returns the indices of both endpoints if both are present.
    fn indices_of(&self, origin: &V, destination: &V) -> Option<(usize, usize)> {
        Some((self.index_of(origin)?, self.index_of(destination)?))
    }

    /// Returns the index of `vertex`, inserting it first if necessary.
    fn ensure_vertex(&mut self, vertex: V) -> usize {
        match self.index_of(&vertex) {
            Some(index) => index,
            None => self.push_vertex(vertex),
        }
    }

    fn push_vertex(&mut self, vertex: V) -> usize {
        trace!(vertex = ?vertex, "vertex inserted");
        self.vertices.push(vertex);
        let index = self.flags.push_vertex();
        debug_assert_eq!(self.vertices.len(), self.flags.size());
        index
    }
}

impl<V: Vertex> GraphStore for AdjacencyMatrixStore<V> {
    type Vertex = V;

    fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.index_of(&vertex).is_some() {
            return false;
        }
        self.push_vertex(vertex);
        true
    }

    fn insert_edge(&mut self, origin: V, destination: V, directedness: Directedness) {
        trace!(origin = ?origin, destination = ?destination, %directedness, "edge inserted");
        let row = self.ensure_vertex(origin);
        let col = self.ensure_vertex(destination);
        self.flags.set(row, col, true);
        if !directedness.is_directed() {
            self.flags.set(col, row, true);
        }
    }

    fn remove_edge(&mut self, origin: &V, destination: &V, directedness: Directedness) {
        let Some((row, col)) = self.indices_of(origin, destination) else {
            return;
        };
        trace!(origin = ?origin, destination = ?destination, %directedness, "edge removed");
        self.flags.set(row, col, false);
        if !directedness.is_directed() {
            self.flags.set(col, row, false);
        }
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.index_of(vertex) else {
            return false;
        };
        self.flags.remove_vertex(index);
        self.vertices.remove(index);
        debug_assert_eq!(self.vertices.len(), self.flags.size());
        trace!(vertex = ?vertex, "vertex removed");
        true
    }

    fn edge_exists(&self, origin: &V, destination: &V) -> bool {
        self.indices_of(origin, destination)
            .is_some_and(|(row, col)| self.flags.get(row, col))
    }

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        let Some(row) = self.index_of(vertex) else {
            return Vec::new();
        };
        self.flags
            .row(row)
            .iter_ones()
            .map(|col| self.vertices[col].clone())
            .collect()
    }

    /// Out-degree is the row sum and in-degree the column sum.  In undirected
    /// mode each vertex maps to [`Degree::Symmetric`] holding the row sum.
    fn degrees(&self, directedness: Directedness) -> BTreeMap<V, Degree> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| {
                let outgoing = self.flags.row_count(index);
                let degree = if directedness.is_directed() {
                    Degree::split(self.flags.column_count(index), outgoing)
                } else {
                    Degree::Symmetric(outgoing)
                };
                (vertex.clone(), degree)
            })
            .collect()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.flags.iter_ones().map(|(row, col)| {
            Edge::new(self.vertices[row].clone(), self.vertices[col].clone())
        })
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index_of(vertex).is_some()
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.flags.count_ones()
    }
}

impl<V: Vertex> Debug for AdjacencyMatrixStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyMatrixStore")
    }
}
