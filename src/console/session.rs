use std::collections::BTreeMap;

use crate::{
    AnyStore, Degree, Directedness, Edge, GraphStore, config::SessionConfig,
    console::command::Command, tracing_support::{debug, info_span},
};

/// A point-in-time copy of a store's contents, shaped the way its
/// representation is printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphView {
    /// Each vertex (sorted) with its successors in insertion order.
    AdjacencyList(Vec<(String, Vec<String>)>),
    /// Sorted vertices and sorted edges.
    EdgeList {
        vertices: Vec<String>,
        edges: Vec<Edge<String>>,
    },
    /// Vertices in index order and the matching rows of flags.
    AdjacencyMatrix {
        vertices: Vec<String>,
        rows: Vec<Vec<bool>>,
    },
}

impl GraphView {
    pub fn is_empty(&self) -> bool {
        match self {
            GraphView::AdjacencyList(entries) => entries.is_empty(),
            GraphView::EdgeList { vertices, .. } | GraphView::AdjacencyMatrix { vertices, .. } => {
                vertices.is_empty()
            }
        }
    }
}

/// The result of executing one [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Graph(GraphView),
    VertexInserted {
        vertex: String,
        inserted: bool,
    },
    EdgeInserted {
        origin: String,
        destination: String,
        directedness: Directedness,
    },
    VertexRemoved {
        vertex: String,
        removed: bool,
    },
    EdgeRemoved {
        origin: String,
        destination: String,
    },
    /// `neighbors` is `None` if the vertex is not in the graph.
    Neighbors {
        vertex: String,
        neighbors: Option<Vec<String>>,
    },
    EdgeChecked {
        origin: String,
        destination: String,
        exists: bool,
    },
    Degrees(BTreeMap<String, Degree>),
    /// `valid` is `None` for an empty path.
    PathChecked {
        path: Vec<String>,
        valid: Option<bool>,
    },
    Quit,
}

/// One console session: a store plus the directedness chosen at boot.
///
/// The directedness is fixed for the lifetime of the session and passed to
/// every edge mutation and degree query.
#[derive(Clone, Debug)]
pub struct Session {
    store: AnyStore<String>,
    directedness: Directedness,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            store: AnyStore::new(config.representation),
            directedness: config.directedness,
        }
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn store(&self) -> &AnyStore<String> {
        &self.store
    }

    /// Runs one command against the store.
    pub fn execute(&mut self, command: Command) -> Response {
        let _span = info_span!("command", command = command.name()).entered();
        let directedness = self.directedness;
        let response = match command {
            Command::ShowGraph => Response::Graph(self.view()),
            Command::InsertVertex(vertex) => {
                let inserted = self.store.insert_vertex(vertex.clone());
                Response::VertexInserted { vertex, inserted }
            }
            Command::InsertEdge {
                origin,
                destination,
            } => {
                self.store
                    .insert_edge(origin.clone(), destination.clone(), directedness);
                Response::EdgeInserted {
                    origin,
                    destination,
                    directedness,
                }
            }
            Command::RemoveVertex(vertex) => {
                let removed = self.store.remove_vertex(&vertex);
                Response::VertexRemoved { vertex, removed }
            }
            Command::RemoveEdge {
                origin,
                destination,
            } => {
                self.store.remove_edge(&origin, &destination, directedness);
                Response::EdgeRemoved {
                    origin,
                    destination,
                }
            }
            Command::ListNeighbors(vertex) => {
                let neighbors = self
                    .store
                    .contains_vertex(&vertex)
                    .then(|| self.store.neighbors(&vertex));
                Response::Neighbors { vertex, neighbors }
            }
            Command::CheckEdge {
                origin,
                destination,
            } => {
                let exists = self.store.edge_exists(&origin, &destination);
                Response::EdgeChecked {
                    origin,
                    destination,
                    exists,
                }
            }
            Command::ShowDegrees => Response::Degrees(self.store.degrees(directedness)),
            Command::ValidatePath(path) => {
                let valid = (!path.is_empty()).then(|| self.store.is_valid_path(&path));
                Response::PathChecked { path, valid }
            }
            Command::Quit => Response::Quit,
        };
        debug!(?response, "command executed");
        response
    }

    /// Takes a snapshot of the store in the shape its representation prints.
    pub fn view(&self) -> GraphView {
        match &self.store {
            AnyStore::AdjacencyList(store) => {
                let mut vertices: Vec<&String> = store.vertices().collect();
                vertices.sort();
                GraphView::AdjacencyList(
                    vertices
                        .into_iter()
                        .map(|v| (v.clone(), store.neighbors(v)))
                        .collect(),
                )
            }
            AnyStore::EdgeList(store) => {
                let mut vertices: Vec<String> = store.vertices().cloned().collect();
                vertices.sort();
                let mut edges: Vec<Edge<String>> = store.edges().collect();
                edges.sort();
                GraphView::EdgeList { vertices, edges }
            }
            AnyStore::AdjacencyMatrix(store) => {
                let flags = store.flags();
                GraphView::AdjacencyMatrix {
                    vertices: store.vertex_order().to_vec(),
                    rows: (0..flags.size())
                        .map(|row| flags.row(row).iter().by_vals().collect())
                        .collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Representation;

    fn session(representation: Representation, directedness: Directedness) -> Session {
        Session::new(SessionConfig::new(representation, directedness))
    }

    fn edge(origin: &str, destination: &str) -> Command {
        Command::InsertEdge {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn test_insert_vertex_reports_duplicates() {
        let mut session = session(Representation::EdgeList, Directedness::Directed);
        assert_eq!(
            session.execute(Command::InsertVertex("A".into())),
            Response::VertexInserted {
                vertex: "A".into(),
                inserted: true
            }
        );
        assert_eq!(
            session.execute(Command::InsertVertex("A".into())),
            Response::VertexInserted {
                vertex: "A".into(),
                inserted: false
            }
        );
    }

    #[test]
    fn test_session_mode_applies_to_edges() {
        for representation in Representation::ALL {
            let mut session = session(representation, Directedness::Undirected);
            session.execute(edge("X", "Y"));
            assert!(session.store().edge_exists(&"Y".into(), &"X".into()));
            session.execute(Command::RemoveEdge {
                origin: "X".into(),
                destination: "Y".into(),
            });
            assert_eq!(session.store().num_edges(), 0, "{representation}");
            assert_eq!(session.store().num_vertices(), 2, "{representation}");
        }
    }

    #[test]
    fn test_neighbors_distinguish_missing_vertex() {
        let mut session = session(Representation::AdjacencyList, Directedness::Directed);
        session.execute(Command::InsertVertex("A".into()));
        assert_eq!(
            session.execute(Command::ListNeighbors("A".into())),
            Response::Neighbors {
                vertex: "A".into(),
                neighbors: Some(vec![])
            }
        );
        assert_eq!(
            session.execute(Command::ListNeighbors("Z".into())),
            Response::Neighbors {
                vertex: "Z".into(),
                neighbors: None
            }
        );
    }

    #[test]
    fn test_empty_path_is_not_checked() {
        let mut session = session(Representation::AdjacencyMatrix, Directedness::Directed);
        assert_eq!(
            session.execute(Command::ValidatePath(vec![])),
            Response::PathChecked {
                path: vec![],
                valid: None
            }
        );
        session.execute(edge("A", "B"));
        assert_eq!(
            session.execute(Command::ValidatePath(vec!["A".into(), "B".into()])),
            Response::PathChecked {
                path: vec!["A".into(), "B".into()],
                valid: Some(true)
            }
        );
    }

    #[test]
    fn test_degrees_use_session_mode() {
        let mut session = session(Representation::AdjacencyMatrix, Directedness::Undirected);
        session.execute(edge("A", "B"));
        let Response::Degrees(degrees) = session.execute(Command::ShowDegrees) else {
            panic!("expected degrees");
        };
        assert_eq!(degrees["A"], Degree::Symmetric(1));
    }

    #[test]
    fn test_views_match_representation() {
        let commands = [edge("B", "A"), edge("A", "C"), Command::InsertVertex("D".into())];

        let mut list = session(Representation::AdjacencyList, Directedness::Directed);
        let mut edges = session(Representation::EdgeList, Directedness::Directed);
        let mut matrix = session(Representation::AdjacencyMatrix, Directedness::Directed);
        for command in commands {
            list.execute(command.clone());
            edges.execute(command.clone());
            matrix.execute(command);
        }

        assert_eq!(
            list.view(),
            GraphView::AdjacencyList(vec![
                ("A".into(), vec!["C".into()]),
                ("B".into(), vec!["A".into()]),
                ("C".into(), vec![]),
                ("D".into(), vec![]),
            ])
        );
        assert_eq!(
            edges.view(),
            GraphView::EdgeList {
                vertices: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                edges: vec![Edge::new("A".into(), "C".into()), Edge::new("B".into(), "A".into())],
            }
        );
        assert_eq!(
            matrix.view(),
            GraphView::AdjacencyMatrix {
                vertices: vec!["B".into(), "A".into(), "C".into(), "D".into()],
                rows: vec![
                    vec![false, true, false, false],
                    vec![false, false, true, false],
                    vec![false, false, false, false],
                    vec![false, false, false, false],
                ],
            }
        );
    }
}
