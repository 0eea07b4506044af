use std::{collections::BTreeMap, fmt::Debug};

use crate::{
    AdjacencyListStore, AdjacencyMatrixStore, Degree, Directedness, Edge, EdgeListStore,
    GraphStore, Representation, Vertex,
};

/// A store whose representation is chosen at run time.
#[derive(Clone)]
pub enum AnyStore<V> {
    AdjacencyList(AdjacencyListStore<V>),
    EdgeList(EdgeListStore<V>),
    AdjacencyMatrix(AdjacencyMatrixStore<V>),
}

/// Forwards a method call to whichever store is inside.
macro_rules! dispatch {
    ($self:expr, $store:ident => $body:expr) => {
        match $self {
            AnyStore::AdjacencyList($store) => $body,
            AnyStore::EdgeList($store) => $body,
            AnyStore::AdjacencyMatrix($store) => $body,
        }
    };
}

impl<V: Vertex> AnyStore<V> {
    /// Creates an empty store with the given representation.
    pub fn new(representation: Representation) -> Self {
        match representation {
            Representation::AdjacencyList => AnyStore::AdjacencyList(AdjacencyListStore::new()),
            Representation::EdgeList => AnyStore::EdgeList(EdgeListStore::new()),
            Representation::AdjacencyMatrix => {
                AnyStore::AdjacencyMatrix(AdjacencyMatrixStore::new())
            }
        }
    }

    pub fn representation(&self) -> Representation {
        match self {
            AnyStore::AdjacencyList(_) => Representation::AdjacencyList,
            AnyStore::EdgeList(_) => Representation::EdgeList,
            AnyStore::AdjacencyMatrix(_) => Representation::AdjacencyMatrix,
        }
    }
}

impl<V: Vertex> Default for AnyStore<V> {
    fn default() -> Self {
        Self::new(Representation::default())
    }
}

impl<V: Vertex> GraphStore for AnyStore<V> {
    type Vertex = V;

    fn insert_vertex(&mut self, vertex: V) -> bool {
        dispatch!(self, store => store.insert_vertex(vertex))
    }

    fn insert_edge(&mut self, origin: V, destination: V, directedness: Directedness) {
        dispatch!(self, store => store.insert_edge(origin, destination, directedness))
    }

    fn remove_edge(&mut self, origin: &V, destination: &V, directedness: Directedness) {
        dispatch!(self, store => store.remove_edge(origin, destination, directedness))
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        dispatch!(self, store => store.remove_vertex(vertex))
    }

    fn edge_exists(&self, origin: &V, destination: &V) -> bool {
        dispatch!(self, store => store.edge_exists(origin, destination))
    }

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        dispatch!(self, store => store.neighbors(vertex))
    }

    fn degrees(&self, directedness: Directedness) -> BTreeMap<V, Degree> {
        dispatch!(self, store => store.degrees(directedness))
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        let vertices: Box<dyn Iterator<Item = &V> + '_> =
            dispatch!(self, store => Box::new(store.vertices()));
        vertices
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        let edges: Box<dyn Iterator<Item = Edge<V>> + '_> =
            dispatch!(self, store => Box::new(store.edges()));
        edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        dispatch!(self, store => store.contains_vertex(vertex))
    }

    fn num_vertices(&self) -> usize {
        dispatch!(self, store => store.num_vertices())
    }

    fn num_edges(&self) -> usize {
        dispatch!(self, store => store.num_edges())
    }

    fn is_valid_path(&self, path: &[V]) -> bool {
        dispatch!(self, store => store.is_valid_path(path))
    }
}

impl<V: Vertex> Debug for AnyStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, store => Debug::fmt(store, f))
    }
}
