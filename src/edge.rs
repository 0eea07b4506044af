use std::{fmt, hash::Hash};

use derivative::Derivative;

/// A directed edge, identified by its two endpoints.
///
/// Ordering compares the origin first, then the destination, so a sorted list
/// of edges groups them by origin.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone"),
    Copy(bound = "V: Copy"),
    Debug(bound = "V: fmt::Debug"),
    Hash(bound = "V: Hash"),
    PartialEq(bound = "V: PartialEq"),
    Eq(bound = "V: Eq"),
    PartialOrd(bound = "V: PartialOrd"),
    Ord(bound = "V: Ord")
)]
pub struct Edge<V> {
    origin: V,
    destination: V,
}

impl<V> Edge<V> {
    pub fn new(origin: V, destination: V) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub fn origin(&self) -> &V {
        &self.origin
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.origin, self.destination)
    }

    /// The edge pointing the other way.
    pub fn reversed(self) -> Self {
        Self {
            origin: self.destination,
            destination: self.origin,
        }
    }

    pub fn is_self_loop(&self) -> bool
    where
        V: Eq,
    {
        self.origin == self.destination
    }

    /// Returns true if `vertex` is either endpoint.
    pub fn touches(&self, vertex: &V) -> bool
    where
        V: Eq,
    {
        self.origin == *vertex || self.destination == *vertex
    }

    pub fn connects(&self, origin: &V, destination: &V) -> bool
    where
        V: Eq,
    {
        self.origin == *origin && self.destination == *destination
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((origin, destination): (V, V)) -> Self {
        Self::new(origin, destination)
    }
}

impl<V> From<Edge<V>> for (V, V) {
    fn from(edge: Edge<V>) -> Self {
        edge.into_endpoints()
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
