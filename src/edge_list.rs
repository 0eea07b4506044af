use std::{collections::BTreeMap, fmt::Debug};

use derivative::Derivative;

use crate::{
    Degree, Directedness, Edge, GraphStore, Vertex, debug::format_debug, tracing_support::trace,
};

/// A graph stored as a flat list of vertices and a flat list of directed
/// edges.
///
/// Both lists keep insertion order and every query is a linear scan of the
/// edge list.  Neighbors are returned in the order their edges were inserted.
#[derive(Derivative)]
#[derivative(Clone(bound = "V: Clone"), Default(bound = ""))]
pub struct EdgeListStore<V> {
    vertices: Vec<V>,
    /// Invariant: contains no duplicates, and both endpoints of every edge are
    /// in `vertices`.
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> EdgeListStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded edges in insertion order.
    pub fn edge_list(&self) -> &[Edge<V>] {
        &self.edges
    }

    fn push_edge(&mut self, edge: Edge<V>) {
        if !self.edges.contains(&edge) {
            trace!(edge = ?edge, "edge inserted");
            self.edges.push(edge);
        }
    }

    fn remove_edge_exact(&mut self, origin: &V, destination: &V) {
        if let Some(position) = self
            .edges
            .iter()
            .position(|edge| edge.connects(origin, destination))
        {
            let edge = self.edges.remove(position);
            trace!(edge = ?edge, "edge removed");
        }
    }
}

impl<V: Vertex> GraphStore for EdgeListStore<V> {
    type Vertex = V;

    fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        trace!(vertex = ?vertex, "vertex inserted");
        self.vertices.push(vertex);
        true
    }

    fn insert_edge(&mut self, origin: V, destination: V, directedness: Directedness) {
        self.insert_vertex(origin.clone());
        self.insert_vertex(destination.clone());
        let edge = Edge::new(origin, destination);
        let reverse = (!directedness.is_directed()).then(|| edge.clone().reversed());
        self.push_edge(edge);
        if let Some(reverse) = reverse {
            self.push_edge(reverse);
        }
    }

    fn remove_edge(&mut self, origin: &V, destination: &V, directedness: Directedness) {
        self.remove_edge_exact(origin, destination);
        if !directedness.is_directed() {
            self.remove_edge_exact(destination, origin);
        }
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(position) = self.vertices.iter().position(|v| v == vertex) else {
            return false;
        };
        self.vertices.remove(position);
        self.edges.retain(|edge| !edge.touches(vertex));
        trace!(vertex = ?vertex, "vertex removed");
        true
    }

    fn edge_exists(&self, origin: &V, destination: &V) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.connects(origin, destination))
    }

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        self.edges
            .iter()
            .filter(|edge| edge.origin() == vertex)
            .map(|edge| edge.destination().clone())
            .collect()
    }

    /// In undirected mode each vertex maps to [`Degree::Symmetric`] holding
    /// its out-degree.
    fn degrees(&self, directedness: Directedness) -> BTreeMap<V, Degree> {
        let mut counts: BTreeMap<&V, (usize, usize)> =
            self.vertices.iter().map(|v| (v, (0, 0))).collect();
        for edge in &self.edges {
            if let Some((_, outgoing)) = counts.get_mut(edge.origin()) {
                *outgoing += 1;
            }
            if let Some((incoming, _)) = counts.get_mut(edge.destination()) {
                *incoming += 1;
            }
        }
        counts
            .into_iter()
            .map(|(vertex, (incoming, outgoing))| {
                let degree = if directedness.is_directed() {
                    Degree::split(incoming, outgoing)
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
        self.edges.iter().cloned()
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<V: Vertex> Debug for EdgeListStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "EdgeListStore")
    }
}
