pub use crate::any_store::AnyStore;
pub use crate::config::Representation;
pub use crate::degree::{Degree, DegreeCounts};
pub use crate::directedness::Directedness;
pub use crate::edge::Edge;
pub use crate::store::GraphStore;
