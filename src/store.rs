use std::{collections::BTreeMap, fmt::Debug, hash::Hash};

use crate::{degree::Degree, directedness::Directedness, edge::Edge};

/// A trait representing a vertex identifier.
///
/// Vertices are their own identity: two equal values name the same vertex.
/// This is implemented for every type with the required bounds, so `String`,
/// `&str` and integers all work.
pub trait Vertex: Eq + Hash + Ord + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Ord + Clone + Debug {}

/// The operations shared by every graph representation.
///
/// None of the methods fail for a missing vertex.  Lookups against an absent
/// vertex return `false` or an empty result, and [`Self::remove_vertex`]
/// reports a missing vertex through its return value.
///
/// Methods that return sequences of vertices or edges return them in a
/// representation-defined order unless otherwise noted.
pub trait GraphStore {
    type Vertex: Vertex;

    /// Adds `vertex` with no edges.  Returns `false`, and does nothing, if it
    /// is already present.
    fn insert_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Records the edge `origin -> destination`, inserting either endpoint
    /// that is missing.  In undirected mode the edge `destination -> origin`
    /// is recorded as well.  Inserting an edge that already exists is a no-op.
    fn insert_edge(
        &mut self,
        origin: Self::Vertex,
        destination: Self::Vertex,
        directedness: Directedness,
    );

    /// Removes the edge `origin -> destination` if it exists, and in
    /// undirected mode `destination -> origin` too.  Never removes vertices.
    fn remove_edge(
        &mut self,
        origin: &Self::Vertex,
        destination: &Self::Vertex,
        directedness: Directedness,
    );

    /// Removes `vertex` and every edge that starts or ends at it.  Returns
    /// `false` if the vertex was not present, in which case the store is
    /// unchanged.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> bool;

    /// Returns true iff the edge `origin -> destination` is recorded.
    fn edge_exists(&self, origin: &Self::Vertex, destination: &Self::Vertex) -> bool;

    /// Returns every `w` such that `self.edge_exists(vertex, w)`.
    fn neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Computes the degree of every vertex.  See [`Degree`] for the shape each
    /// representation reports in undirected mode.
    fn degrees(&self, directedness: Directedness) -> BTreeMap<Self::Vertex, Degree>;

    /// Iterates over all vertices.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Iterates over every recorded directed edge.  An undirected edge shows
    /// up once per direction.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex>> + '_;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().any(|v| v == vertex)
    }

    fn num_vertices(&self) -> usize {
        self.vertices().count()
    }

    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Returns true if every consecutive pair in `path` is connected by a
    /// recorded edge.  Paths with fewer than two vertices are always valid,
    /// even if the vertex is not in the graph.
    fn is_valid_path(&self, path: &[Self::Vertex]) -> bool {
        path.windows(2)
            .all(|pair| self.edge_exists(&pair[0], &pair[1]))
    }
}
