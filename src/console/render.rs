//! Text rendering for console responses.

use std::fmt::{self, Display, Formatter};

use crate::console::session::{GraphView, Response};

/// Width of one matrix cell, including padding.
const CELL_WIDTH: usize = 3;

impl Display for GraphView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "The graph is empty.");
        }
        match self {
            GraphView::AdjacencyList(entries) => {
                for (vertex, neighbors) in entries {
                    writeln!(f, "  {vertex} -> [ {} ]", neighbors.join(", "))?;
                }
                Ok(())
            }
            GraphView::EdgeList { vertices, edges } => {
                writeln!(f, "Vertices: {}", vertices.join(", "))?;
                writeln!(f, "Edges:")?;
                if edges.is_empty() {
                    writeln!(f, "  (none)")?;
                }
                for edge in edges {
                    writeln!(f, "  {edge}")?;
                }
                Ok(())
            }
            GraphView::AdjacencyMatrix { vertices, rows } => {
                let header: String = vertices
                    .iter()
                    .map(|v| format!("{v:<CELL_WIDTH$}"))
                    .collect();
                writeln!(f, "{}", format!("     {header}").trim_end())?;
                writeln!(f, "{}", "-".repeat(5 + vertices.len() * CELL_WIDTH))?;
                for (vertex, row) in vertices.iter().zip(rows) {
                    let cells: String = row
                        .iter()
                        .map(|&flag| format!("{:<CELL_WIDTH$}", u8::from(flag)))
                        .collect();
                    writeln!(
                        f,
                        "{}",
                        format!("{vertex:<CELL_WIDTH$} | {cells}").trim_end()
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Response::Graph(view) => write!(f, "{view}"),
            Response::VertexInserted { vertex, inserted } => {
                if *inserted {
                    writeln!(f, "Vertex '{vertex}' inserted.")
                } else {
                    writeln!(f, "Vertex '{vertex}' already exists.")
                }
            }
            Response::EdgeInserted {
                origin,
                destination,
                directedness,
            } => writeln!(
                f,
                "Edge {origin} {} {destination} inserted.",
                directedness.arrow()
            ),
            Response::VertexRemoved { vertex, removed } => {
                if *removed {
                    writeln!(f, "Vertex '{vertex}' and its edges were removed.")
                } else {
                    writeln!(f, "Error: vertex '{vertex}' not found.")
                }
            }
            Response::EdgeRemoved {
                origin,
                destination,
            } => writeln!(
                f,
                "Edge between {origin} and {destination} removed (if it existed)."
            ),
            Response::Neighbors { vertex, neighbors } => match neighbors {
                None => writeln!(f, "Vertex '{vertex}' not found in the graph."),
                Some(neighbors) if neighbors.is_empty() => {
                    writeln!(f, "Vertex '{vertex}' has no neighbors (outgoing edges).")
                }
                Some(neighbors) => {
                    writeln!(f, "Neighbors of '{vertex}': {}", neighbors.join(", "))
                }
            },
            Response::EdgeChecked {
                origin,
                destination,
                exists,
            } => {
                if *exists {
                    writeln!(f, "YES, edge {origin} -> {destination} exists.")
                } else {
                    writeln!(f, "NO, edge {origin} -> {destination} does not exist.")
                }
            }
            Response::Degrees(degrees) => {
                writeln!(f, "--- Vertex degrees ---")?;
                if degrees.is_empty() {
                    return writeln!(f, "Empty graph.");
                }
                for (vertex, degree) in degrees {
                    writeln!(f, "  {vertex}: {degree}")?;
                }
                Ok(())
            }
            Response::PathChecked { path, valid } => match valid {
                None => writeln!(f, "Empty path."),
                Some(valid) => writeln!(
                    f,
                    "The path '{}' is {}.",
                    path.join(" -> "),
                    if *valid { "VALID" } else { "INVALID" }
                ),
            },
            Response::Quit => writeln!(f, "Exiting..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{Degree, Directedness, Edge};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_graph() {
        let view = GraphView::EdgeList {
            vertices: vec![],
            edges: vec![],
        };
        assert_eq!(view.to_string(), "The graph is empty.\n");
        assert_eq!(
            GraphView::AdjacencyList(vec![]).to_string(),
            "The graph is empty.\n"
        );
    }

    #[test]
    fn test_adjacency_list_dump() {
        let view = GraphView::AdjacencyList(vec![
            ("A".into(), strings(&["C", "B"])),
            ("B".into(), vec![]),
        ]);
        assert_eq!(view.to_string(), "  A -> [ C, B ]\n  B -> [  ]\n");
    }

    #[test]
    fn test_edge_list_dump() {
        let view = GraphView::EdgeList {
            vertices: strings(&["A", "B"]),
            edges: vec![Edge::new("A".into(), "B".into())],
        };
        assert_eq!(view.to_string(), "Vertices: A, B\nEdges:\n  A -> B\n");

        let view = GraphView::EdgeList {
            vertices: strings(&["A"]),
            edges: vec![],
        };
        assert_eq!(view.to_string(), "Vertices: A\nEdges:\n  (none)\n");
    }

    #[test]
    fn test_matrix_dump() {
        let view = GraphView::AdjacencyMatrix {
            vertices: strings(&["A", "B"]),
            rows: vec![vec![false, true], vec![true, true]],
        };
        assert_eq!(
            view.to_string(),
            "     A  B\n-----------\nA   | 0  1\nB   | 1  1\n"
        );
    }

    #[test]
    fn test_degrees() {
        let mut degrees = BTreeMap::new();
        degrees.insert("B".to_string(), Degree::split(1, 1));
        degrees.insert("A".to_string(), Degree::split(0, 1));
        assert_eq!(
            Response::Degrees(degrees).to_string(),
            "--- Vertex degrees ---\n  A: out=1, in=0, total=1\n  B: out=1, in=1, total=2\n"
        );

        let mut degrees = BTreeMap::new();
        degrees.insert("X".to_string(), Degree::Symmetric(3));
        assert_eq!(
            Response::Degrees(degrees).to_string(),
            "--- Vertex degrees ---\n  X: degree=3\n"
        );
        assert_eq!(
            Response::Degrees(BTreeMap::new()).to_string(),
            "--- Vertex degrees ---\nEmpty graph.\n"
        );
    }

    #[test]
    fn test_edge_messages() {
        let inserted = Response::EdgeInserted {
            origin: "A".into(),
            destination: "B".into(),
            directedness: Directedness::Undirected,
        };
        assert_eq!(inserted.to_string(), "Edge A <-> B inserted.\n");
        let checked = Response::EdgeChecked {
            origin: "A".into(),
            destination: "B".into(),
            exists: false,
        };
        assert_eq!(checked.to_string(), "NO, edge A -> B does not exist.\n");
    }

    #[test]
    fn test_neighbor_messages() {
        let missing = Response::Neighbors {
            vertex: "Z".into(),
            neighbors: None,
        };
        assert_eq!(missing.to_string(), "Vertex 'Z' not found in the graph.\n");
        let lonely = Response::Neighbors {
            vertex: "A".into(),
            neighbors: Some(vec![]),
        };
        assert!(lonely.to_string().contains("has no neighbors"));
        let found = Response::Neighbors {
            vertex: "A".into(),
            neighbors: Some(strings(&["B", "C"])),
        };
        assert_eq!(found.to_string(), "Neighbors of 'A': B, C\n");
    }

    #[test]
    fn test_path_messages() {
        let valid = Response::PathChecked {
            path: strings(&["A", "B"]),
            valid: Some(true),
        };
        assert_eq!(valid.to_string(), "The path 'A -> B' is VALID.\n");
        let empty = Response::PathChecked {
            path: vec![],
            valid: None,
        };
        assert_eq!(empty.to_string(), "Empty path.\n");
    }
}
