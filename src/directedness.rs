use std::{fmt, str::FromStr};

use crate::config::ParseError;

/// Whether edge mutations are mirrored in both directions.
///
/// A store never remembers this itself: every edge insert/remove and degree
/// query is told which mode the caller is running in.  In undirected mode an
/// edge `a -- b` is recorded as the two directed edges `a -> b` and `b -> a`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    #[default]
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }

    /// Maps a yes/no answer to "is the graph undirected?" onto a mode.
    pub fn from_undirected(undirected: bool) -> Self {
        if undirected {
            Directedness::Undirected
        } else {
            Directedness::Directed
        }
    }

    /// The arrow used when printing a single edge in this mode.
    pub fn arrow(self) -> &'static str {
        match self {
            Directedness::Directed => "->",
            Directedness::Undirected => "<->",
        }
    }
}

impl fmt::Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Directedness::Directed => "directed",
            Directedness::Undirected => "undirected",
        })
    }
}

impl FromStr for Directedness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed" | "d" => Ok(Directedness::Directed),
            "undirected" | "u" => Ok(Directedness::Undirected),
            _ => Err(ParseError::Directedness(s.to_string())),
        }
    }
}
