use std::fmt;

/// Incoming, outgoing and total edge counts for one vertex.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct DegreeCounts {
    pub incoming: usize,
    pub outgoing: usize,
    pub total: usize,
}

impl DegreeCounts {
    pub fn new(incoming: usize, outgoing: usize) -> Self {
        Self {
            incoming,
            outgoing,
            total: incoming + outgoing,
        }
    }
}

/// The degree of a vertex as reported by [`GraphStore::degrees`].
///
/// Which shape a store reports in undirected mode is up to the store: the
/// edge-list and matrix stores collapse to [`Degree::Symmetric`], while the
/// adjacency-list store always reports [`Degree::Split`].
///
/// [`GraphStore::degrees`]: crate::GraphStore::degrees
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Degree {
    Split(DegreeCounts),
    /// The out-degree of a vertex in an undirected graph, which equals its
    /// in-degree.
    Symmetric(usize),
}

impl Degree {
    pub fn split(incoming: usize, outgoing: usize) -> Self {
        Degree::Split(DegreeCounts::new(incoming, outgoing))
    }

    pub fn outgoing(&self) -> usize {
        match self {
            Degree::Split(counts) => counts.outgoing,
            Degree::Symmetric(degree) => *degree,
        }
    }

    pub fn incoming(&self) -> usize {
        match self {
            Degree::Split(counts) => counts.incoming,
            Degree::Symmetric(degree) => *degree,
        }
    }

    pub fn as_split(&self) -> Option<&DegreeCounts> {
        match self {
            Degree::Split(counts) => Some(counts),
            Degree::Symmetric(_) => None,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Split(counts) => write!(
                f,
                "out={}, in={}, total={}",
                counts.outgoing, counts.incoming, counts.total
            ),
            Degree::Symmetric(degree) => write!(f, "degree={degree}"),
        }
    }
}
