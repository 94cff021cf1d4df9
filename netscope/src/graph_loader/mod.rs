//! Loaders that read graphs from files on disk.
//!
//! # Example
//!
//! ```no_run
//! use netscope::graph_loader::edge_list::load_edge_list;
//!
//! let g = load_edge_list("/tmp/twitter.txt.gz").unwrap();
//! println!("{} vertices, {} edges", g.count_nodes(), g.count_edges());
//! ```

pub mod edge_list;
