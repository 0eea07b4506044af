use std::fmt::Formatter;

use crate::GraphStore;

/// Formats a store for debug output with vertices and edges in sorted order,
/// so that stores holding the same graph print the same regardless of
/// representation.
pub fn format_debug<S>(store: &S, f: &mut Formatter<'_>, name: &str) -> std::fmt::Result
where
    S: GraphStore,
{
    let mut vertices: Vec<_> = store.vertices().collect();
    vertices.sort();
    let mut edges: Vec<_> = store.edges().map(|edge| edge.into_endpoints()).collect();
    edges.sort();
    f.debug_struct(name)
        .field("vertices", &vertices)
        .field("edges", &edges)
        .finish()
}
