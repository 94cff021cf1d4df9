//! Plain-text edge lists: one `src dst` pair of whitespace separated tokens per line.
//!
//! Any line containing `#` is treated as a comment and skipped in full, as are blank lines.
//! Files whose name ends in `.gz` are decompressed on the fly.

use crate::{
    db::graph::{DiGraph, GraphBuilder},
    errors::GraphError,
};
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::{debug, info};

/// Reads an edge list from any buffered reader.
///
/// # Errors
///
/// * [`GraphError::MalformedInput`] for a non-comment line that does not hold exactly two
///   tokens. `line` is 1-based.
/// * [`GraphError::IOError`] if reading fails.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<DiGraph<String>, GraphError> {
    let mut builder = GraphBuilder::new();
    let mut skipped = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.contains('#') || line.trim().is_empty() {
            skipped += 1;
            continue;
        }
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(src), Some(dst), None) => {
                builder.add_edge(src.to_owned(), dst.to_owned());
            }
            _ => {
                return Err(GraphError::MalformedInput {
                    line: number + 1,
                    content: line,
                })
            }
        }
    }

    debug!(skipped, "skipped comment and blank lines");
    Ok(builder.build())
}

/// Reads an edge list from `path`, gunzipping it if the file name ends in `.gz`.
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<DiGraph<String>, GraphError> {
    let path = path.as_ref();
    let is_gziped = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".gz"));

    let file = File::open(path)?;
    let reader: Box<dyn Read> = if is_gziped {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let g = parse_edge_list(BufReader::new(reader))?;

    info!(
        path = %path.display(),
        num_nodes = g.count_nodes(),
        num_edges = g.count_edges(),
        "loaded edge list"
    );
    Ok(g)
}
