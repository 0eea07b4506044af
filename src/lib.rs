//! In-memory directed and undirected graphs in three interchangeable
//! representations: adjacency list, edge list and adjacency matrix.
//!
//! Every representation implements [`GraphStore`], so the same sequence of
//! operations produces the same vertex and edge sets whichever one is used.
//! [`AnyStore`] picks a representation at run time, and the [`console`]
//! module drives one through a text menu.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod any_store;
pub mod config;
pub mod console;
pub mod degree;
pub mod directedness;
pub mod edge;
pub mod edge_list;
pub mod prelude;
pub mod store;
pub mod tracing_support;

mod debug;

pub use adjacency_list::AdjacencyListStore;
pub use adjacency_matrix::{AdjacencyMatrixStore, FlagMatrix};
pub use any_store::AnyStore;
pub use config::{Representation, SessionConfig};
pub use degree::{Degree, DegreeCounts};
pub use directedness::Directedness;
pub use edge::Edge;
pub use edge_list::EdgeListStore;
pub use store::{GraphStore, Vertex};
