use std::io::Write;

use netscope::{graph_loader::edge_list::load_edge_list, prelude::*};
use pretty_assertions::assert_eq;

#[test]
fn load_edge_list_with_comment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a b").unwrap();
    writeln!(file, "b c").unwrap();
    writeln!(file, "# comment").unwrap();
    writeln!(file, "c a").unwrap();
    file.flush().unwrap();

    let graph = load_edge_list(file.path()).unwrap();
    assert_eq!(graph.count_nodes(), 3);
    assert_eq!(graph.count_edges(), 3);
    assert_eq!(graph.count_undirected_edges(), 3);
    assert_eq!(
        graph
            .edges()
            .map(|(src, dst)| (src.as_str(), dst.as_str()))
            .collect::<Vec<_>>(),
        vec![("a", "b"), ("b", "c"), ("c", "a")]
    );
}

#[test]
fn reciprocal_edges_collapse_when_undirected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1 2\n2 1\n2 3\n\n3 3\n").unwrap();
    file.flush().unwrap();

    let graph = load_edge_list(file.path()).unwrap();
    assert_eq!(graph.count_nodes(), 3);
    assert_eq!(graph.count_edges(), 3);
    assert_eq!(graph.count_undirected_edges(), 2);
}

#[test]
fn malformed_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1 2\n# fine\n3\n").unwrap();
    file.flush().unwrap();

    assert!(matches!(
        load_edge_list(file.path()),
        Err(GraphError::MalformedInput { line: 3, .. })
    ));
}
