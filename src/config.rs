//! Session configuration shared by the console binary and the library.

use std::{fmt, str::FromStr};

use crate::directedness::Directedness;

/// Error returned when a configuration value cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown representation {0:?} (expected list, edges or matrix)")]
    Representation(String),
    #[error("unknown mode {0:?} (expected directed or undirected)")]
    Directedness(String),
    #[error("expected a yes/no answer, got {0:?}")]
    YesNo(String),
}

/// Which in-memory layout backs the graph.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Representation {
    #[default]
    AdjacencyList,
    EdgeList,
    AdjacencyMatrix,
}

impl Representation {
    pub const ALL: [Representation; 3] = [
        Representation::AdjacencyList,
        Representation::EdgeList,
        Representation::AdjacencyMatrix,
    ];

    /// Human-readable title used in console banners.
    pub fn title(self) -> &'static str {
        match self {
            Representation::AdjacencyList => "Adjacency List",
            Representation::EdgeList => "Edge List",
            Representation::AdjacencyMatrix => "Adjacency Matrix",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Representation::AdjacencyList => "list",
            Representation::EdgeList => "edges",
            Representation::AdjacencyMatrix => "matrix",
        })
    }
}

impl FromStr for Representation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "adjacency-list" => Ok(Representation::AdjacencyList),
            "edges" | "edge-list" => Ok(Representation::EdgeList),
            "matrix" | "adjacency-matrix" => Ok(Representation::AdjacencyMatrix),
            _ => Err(ParseError::Representation(s.to_string())),
        }
    }
}

/// Everything fixed at boot time for one console session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub representation: Representation,
    pub directedness: Directedness,
}

impl SessionConfig {
    pub fn new(representation: Representation, directedness: Directedness) -> Self {
        Self {
            representation,
            directedness,
        }
    }
}

/// Parses the answer to a yes/no question.  Accepts English and Portuguese
/// single-letter answers (`y`/`s` for yes, `n` for no).
pub fn parse_yes_no(answer: &str) -> Result<bool, ParseError> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "s" | "sim" => Ok(true),
        "n" | "no" | "nao" | "não" => Ok(false),
        _ => Err(ParseError::YesNo(answer.to_string())),
    }
}
