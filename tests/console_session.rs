use graphstore::console::{self, Session};
use graphstore::prelude::*;

fn run_script(
    representation: Representation,
    directedness: Option<Directedness>,
    script: &str,
) -> (Session, String) {
    let mut output = Vec::new();
    let session = console::run(script.as_bytes(), &mut output, representation, directedness)
        .expect("console session failed");
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn test_undirected_list_session() {
    let script = "\
s
3
A
B
3
B
C
1
6
B
8
9
A, B, C
0
";
    let (session, output) = run_script(Representation::AdjacencyList, None, script);
    assert_eq!(session.directedness(), Directedness::Undirected);
    assert!(output.contains("--- Undirected graph (Adjacency List) created ---"));
    assert!(output.contains("Edge A <-> B inserted."));
    assert!(output.contains("  A -> [ B ]\n  B -> [ A, C ]\n  C -> [ B ]\n"));
    assert!(output.contains("Neighbors of 'B': A, C"));
    assert!(output.contains("  B: out=2, in=2, total=4"));
    assert!(output.contains("The path 'A -> B -> C' is VALID."));
}

#[test]
fn test_directed_matrix_session() {
    let script = "\
3
A
B
3
B
B
1
7
B
A
9
B,A
8
0
";
    let (session, output) = run_script(
        Representation::AdjacencyMatrix,
        Some(Directedness::Directed),
        script,
    );
    assert_eq!(session.store().num_edges(), 2);
    assert!(output.contains("     A  B\n-----------\nA   | 0  1\nB   | 0  1\n"));
    assert!(output.contains("NO, edge B -> A does not exist."));
    assert!(output.contains("The path 'B -> A' is INVALID."));
    assert!(output.contains("  A: out=1, in=0, total=1"));
    assert!(output.contains("  B: out=1, in=2, total=3"));
}

#[test]
fn test_edge_list_removals() {
    let script = "\
n
3
A
B
3
C
A
4
A
4
A
5
C
B
1
0
";
    let (session, output) = run_script(Representation::EdgeList, None, script);
    assert_eq!(session.store().num_edges(), 0);
    assert!(output.contains("Vertex 'A' and its edges were removed."));
    assert!(output.contains("Error: vertex 'A' not found."));
    assert!(output.contains("Edge between C and B removed (if it existed)."));
    assert!(output.contains("Vertices: B, C\nEdges:\n  (none)\n"));
}

#[test]
fn test_undirected_edge_list_degrees_are_symmetric() {
    let script = "3\nX\nY\n8\n0\n";
    let (_, output) = run_script(
        Representation::EdgeList,
        Some(Directedness::Undirected),
        script,
    );
    assert!(output.contains("  X: degree=1\n  Y: degree=1\n"));
}

#[test]
fn test_empty_graph_and_empty_path() {
    let script = "1\n8\n9\n , ,\n6\nZ\n0\n";
    let (_, output) = run_script(
        Representation::AdjacencyList,
        Some(Directedness::Directed),
        script,
    );
    assert!(output.contains("The graph is empty."));
    assert!(output.contains("Empty graph."));
    assert!(output.contains("Empty path."));
    assert!(output.contains("Vertex 'Z' not found in the graph."));
}

#[test]
fn test_mode_prompt_fails_without_input() {
    let mut output = Vec::new();
    let result = console::run(
        "".as_bytes(),
        &mut output,
        Representation::AdjacencyList,
        None,
    );
    assert!(matches!(result, Err(console::ConsoleError::UnexpectedEof)));
}
