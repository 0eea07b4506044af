use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
};

use derivative::Derivative;

use crate::{
    Degree, Directedness, Edge, GraphStore, Vertex, debug::format_debug, tracing_support::trace,
};

/// A graph stored as a map from each vertex to the list of its direct
/// successors.
///
/// Successor lists preserve insertion order and never contain duplicates, so
/// [`GraphStore::neighbors`] returns successors in the order their edges were
/// first inserted.  Checking for an edge is linear in the out-degree of the
/// origin; removing a vertex is linear in the total number of edges.
#[derive(Derivative)]
#[derivative(Clone(bound = "V: Clone"), Default(bound = ""))]
pub struct AdjacencyListStore<V> {
    successors: HashMap<V, Vec<V>>,
}

impl<V: Vertex> AdjacencyListStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the successor list of `vertex` in insertion order, or `None`
    /// if the vertex is absent.
    pub fn successors(&self, vertex: &V) -> Option<&[V]> {
        self.successors.get(vertex).map(Vec::as_slice)
    }

    /// Appends `destination` to the successor list of `origin` unless it is
    /// already there.  `origin` must be present.
    fn link(&mut self, origin: &V, destination: &V) {
        if let Some(list) = self.successors.get_mut(origin)
            && !list.contains(destination)
        {
            list.push(destination.clone());
            trace!(origin = ?origin, destination = ?destination, "edge inserted");
        }
    }

    fn unlink(&mut self, origin: &V, destination: &V) {
        if let Some(list) = self.successors.get_mut(origin)
            && let Some(position) = list.iter().position(|w| w == destination)
        {
            list.remove(position);
            trace!(origin = ?origin, destination = ?destination, "edge removed");
        }
    }
}

impl<V: Vertex> GraphStore for AdjacencyListStore<V> {
    type Vertex = V;

    fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.successors.contains_key(&vertex) {
            return false;
        }
        trace!(vertex = ?vertex, "vertex inserted");
        self.successors.insert(vertex, Vec::new());
        true
    }

    fn insert_edge(&mut self, origin: V, destination: V, directedness: Directedness) {
        self.insert_vertex(origin.clone());
        self.insert_vertex(destination.clone());
        self.link(&origin, &destination);
        if !directedness.is_directed() {
            self.link(&destination, &origin);
        }
    }

    fn remove_edge(&mut self, origin: &V, destination: &V, directedness: Directedness) {
        self.unlink(origin, destination);
        if !directedness.is_directed() {
            self.unlink(destination, origin);
        }
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.successors.remove(vertex).is_none() {
            return false;
        }
        for list in self.successors.values_mut() {
            list.retain(|w| w != vertex);
        }
        trace!(vertex = ?vertex, "vertex removed");
        true
    }

    fn edge_exists(&self, origin: &V, destination: &V) -> bool {
        self.successors
            .get(origin)
            .is_some_and(|list| list.contains(destination))
    }

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        self.successors.get(vertex).cloned().unwrap_or_default()
    }

    /// Always reports [`Degree::Split`], whatever the directedness.
    fn degrees(&self, _directedness: Directedness) -> BTreeMap<V, Degree> {
        let mut incoming: HashMap<&V, usize> = HashMap::with_capacity(self.successors.len());
        for destination in self.successors.values().flatten() {
            *incoming.entry(destination).or_default() += 1;
        }
        self.successors
            .iter()
            .map(|(vertex, list)| {
                let in_degree = incoming.get(vertex).copied().unwrap_or(0);
                (vertex.clone(), Degree::split(in_degree, list.len()))
            })
            .collect()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.successors.keys()
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.successors.iter().flat_map(|(origin, list)| {
            list.iter()
                .map(move |destination| Edge::new(origin.clone(), destination.clone()))
        })
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.successors.contains_key(vertex)
    }

    fn num_vertices(&self) -> usize {
        self.successors.len()
    }

    fn num_edges(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }
}

impl<V: Vertex> Debug for AdjacencyListStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_debug(self, f, "AdjacencyListStore")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store_tests::graph_store_tests;

    graph_store_tests!(AdjacencyListStore);

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut store = AdjacencyListStore::new();
        store.insert_edge("A", "C", Directedness::Directed);
        store.insert_edge("A", "B", Directedness::Directed);
        store.insert_edge("A", "D", Directedness::Directed);
        store.insert_edge("A", "C", Directedness::Directed);
        assert_eq!(store.neighbors(&"A"), vec!["C", "B", "D"]);
        assert_eq!(store.successors(&"A"), Some(&["C", "B", "D"][..]));
        assert_eq!(store.successors(&"Z"), None);
    }

    #[test]
    fn test_undirected_degrees_stay_split() {
        let mut store = AdjacencyListStore::new();
        store.insert_edge("A", "B", Directedness::Undirected);
        let degrees = store.degrees(Directedness::Undirected);
        assert_eq!(degrees[&"A"], Degree::split(1, 1));
        assert_eq!(degrees[&"B"], Degree::split(1, 1));
    }

    #[test]
    fn test_debug_lists_sorted_edges() {
        let mut store = AdjacencyListStore::new();
        store.insert_edge("b", "a", Directedness::Directed);
        store.insert_vertex("c");
        let debug = format!("{store:?}");
        assert!(debug.starts_with("AdjacencyListStore"));
        assert!(debug.contains(r#"["a", "b", "c"]"#));
        assert!(debug.contains(r#"("b", "a")"#));
    }
}
