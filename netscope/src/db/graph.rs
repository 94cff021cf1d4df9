//! The directed graph store.
//!
//! A [`DiGraph`] is built once, by a loader, a generator or a [`GraphBuilder`], and is read-only
//! afterwards. Every algorithm in this crate borrows it immutably.
//!
//! # Examples
//!
//! ```rust
//! use netscope::prelude::*;
//!
//! let graph = DiGraph::from_adjacency([
//!     ("a", vec!["b"]),
//!     ("b", vec!["c"]),
//!     ("c", vec!["a"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(graph.count_nodes(), 3);
//! assert_eq!(graph.count_edges(), 3);
//! assert_eq!(graph.count_undirected_edges(), 3);
//! ```

use crate::errors::GraphError;
use indexmap::IndexSet;
use netscope_api::core::entities::{NodeId, VID};
use std::fmt::{self, Display, Formatter};
use tracing::trace;

/// An immutable directed graph without weights, multi-edges or self-loops.
///
/// Vertices are kept in insertion order and addressed internally by their dense [`VID`].
/// Every vertex that appears as the endpoint of an edge is itself a vertex of the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiGraph<V: NodeId> {
    ids: IndexSet<V>,
    adj: Vec<IndexSet<VID>>,
    num_edges: usize,
}

impl<V: NodeId> Default for DiGraph<V> {
    fn default() -> Self {
        Self {
            ids: IndexSet::new(),
            adj: Vec::new(),
            num_edges: 0,
        }
    }
}

impl<V: NodeId> DiGraph<V> {
    /// Builds a graph from a mapping of vertex to out-neighbours.
    ///
    /// Every neighbour must also appear as a key, otherwise the mapping refers to an implicit
    /// vertex and construction fails with [`GraphError::UndefinedVertex`]. Repeated keys have
    /// their neighbour sets merged, and self-loops are dropped.
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let entries: Vec<(V, Vec<V>)> = adjacency
            .into_iter()
            .map(|(v, neighbours)| (v, neighbours.into_iter().collect()))
            .collect();

        let mut builder = GraphBuilder::with_capacity(entries.len());
        let sources: Vec<VID> = entries
            .iter()
            .map(|(v, _)| builder.add_node(v.clone()))
            .collect();
        for (src, (_, neighbours)) in sources.into_iter().zip(entries) {
            for neighbour in neighbours {
                let dst = builder
                    .ids
                    .get_index_of(&neighbour)
                    .map(VID)
                    .ok_or_else(|| GraphError::undefined_vertex(&neighbour))?;
                builder.insert_edge(src, dst);
            }
        }
        Ok(builder.build())
    }

    /// Iterate over all vertex identifiers in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.ids.iter()
    }

    /// Iterate over all dense vertex indices.
    pub fn vids(&self) -> impl ExactSizeIterator<Item = VID> {
        (0..self.ids.len()).map(VID)
    }

    pub fn count_nodes(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn has_node(&self, v: &V) -> bool {
        self.ids.contains(v)
    }

    /// Dense index of `v`, if it is a vertex of this graph.
    pub fn vid(&self, v: &V) -> Option<VID> {
        self.ids.get_index_of(v).map(VID)
    }

    /// Identifier for a dense index.
    ///
    /// # Panics
    ///
    /// If `vid` was not produced by this graph.
    pub fn node_id(&self, vid: VID) -> &V {
        &self.ids[vid.index()]
    }

    /// Out-neighbours of a vertex addressed by dense index.
    ///
    /// # Panics
    ///
    /// If `vid` was not produced by this graph.
    pub fn out_vids(&self, vid: VID) -> &IndexSet<VID> {
        &self.adj[vid.index()]
    }

    /// Out-neighbours of `v`.
    pub fn out_neighbours(
        &self,
        v: &V,
    ) -> Result<impl ExactSizeIterator<Item = &V> + '_, GraphError> {
        let vid = self.vid(v).ok_or_else(|| GraphError::undefined_vertex(v))?;
        Ok(self.adj[vid.index()].iter().map(|n| self.node_id(*n)))
    }

    pub fn out_degree(&self, v: &V) -> Result<usize, GraphError> {
        let vid = self.vid(v).ok_or_else(|| GraphError::undefined_vertex(v))?;
        Ok(self.adj[vid.index()].len())
    }

    /// Number of directed edges.
    pub fn count_edges(&self) -> usize {
        self.num_edges
    }

    /// Iterate over all directed edges as `(src, dst)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vids().flat_map(move |src| {
            self.adj[src.index()]
                .iter()
                .map(move |dst| (self.node_id(src), self.node_id(*dst)))
        })
    }

    /// The edges of the graph seen as undirected.
    ///
    /// A pair of anti-parallel edges `u -> v`, `v -> u` collapses into a single pair, reported
    /// the first time either direction is encountered.
    pub fn undirected_edges(&self) -> Vec<(&V, &V)> {
        let mut seen: IndexSet<(VID, VID)> = IndexSet::with_capacity(self.num_edges);
        for src in self.vids() {
            for dst in self.adj[src.index()].iter() {
                if !seen.contains(&(*dst, src)) {
                    seen.insert((src, *dst));
                }
            }
        }
        seen.into_iter()
            .map(|(src, dst)| (self.node_id(src), self.node_id(dst)))
            .collect()
    }

    /// Number of unordered vertex pairs joined by at least one directed edge.
    pub fn count_undirected_edges(&self) -> usize {
        let reciprocated = self
            .vids()
            .map(|src| {
                self.adj[src.index()]
                    .iter()
                    .filter(|dst| self.adj[dst.index()].contains(&src))
                    .count()
            })
            .sum::<usize>();
        // every reciprocated pair was counted once from each side
        self.num_edges - reciprocated / 2
    }

    /// A copy of this graph with every edge made reciprocal.
    pub fn to_undirected(&self) -> DiGraph<V> {
        let mut adj = self.adj.clone();
        for src in self.vids() {
            for dst in self.adj[src.index()].iter() {
                adj[dst.index()].insert(src);
            }
        }
        let num_edges = adj.iter().map(|n| n.len()).sum();
        DiGraph {
            ids: self.ids.clone(),
            adj,
            num_edges,
        }
    }
}

impl<V: NodeId> Display for DiGraph<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vertices:")?;
        for v in self.nodes() {
            write!(f, " {v:?}")?;
        }
        write!(f, "\nedges:")?;
        for (src, dst) in self.edges() {
            write!(f, " ({src:?}, {dst:?})")?;
        }
        Ok(())
    }
}

/// Incrementally assembles a [`DiGraph`].
///
/// This is what loaders and generators use; the analytic code only ever sees the finished
/// graph.
#[derive(Clone, Debug)]
pub struct GraphBuilder<V: NodeId> {
    ids: IndexSet<V>,
    adj: Vec<IndexSet<VID>>,
    num_edges: usize,
}

impl<V: NodeId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: NodeId> GraphBuilder<V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            ids: IndexSet::with_capacity(num_nodes),
            adj: Vec::with_capacity(num_nodes),
            num_edges: 0,
        }
    }

    /// Adds `v` if it is not already present and returns its dense index.
    pub fn add_node(&mut self, v: V) -> VID {
        let (index, inserted) = self.ids.insert_full(v);
        if inserted {
            self.adj.push(IndexSet::new());
        }
        VID(index)
    }

    /// Adds the edge `src -> dst`, creating either endpoint if needed.
    ///
    /// Returns `true` if the edge is new. Self-loops register the vertex but are otherwise
    /// ignored.
    pub fn add_edge(&mut self, src: V, dst: V) -> bool {
        let src = self.add_node(src);
        let dst = self.add_node(dst);
        self.insert_edge(src, dst)
    }

    pub fn has_edge(&self, src: &V, dst: &V) -> bool {
        match (self.ids.get_index_of(src), self.ids.get_index_of(dst)) {
            (Some(src), Some(dst)) => self.adj[src].contains(&VID(dst)),
            _ => false,
        }
    }

    pub fn count_nodes(&self) -> usize {
        self.ids.len()
    }

    pub fn count_edges(&self) -> usize {
        self.num_edges
    }

    pub fn build(self) -> DiGraph<V> {
        DiGraph {
            ids: self.ids,
            adj: self.adj,
            num_edges: self.num_edges,
        }
    }

    pub(crate) fn insert_edge(&mut self, src: VID, dst: VID) -> bool {
        if src == dst {
            trace!(vertex = ?self.ids[src.index()], "ignoring self-loop");
            return false;
        }
        let inserted = self.adj[src.index()].insert(dst);
        if inserted {
            self.num_edges += 1;
        }
        inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_graph_strat;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn cycle() -> DiGraph<&'static str> {
        DiGraph::from_adjacency([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]).unwrap()
    }

    #[test]
    fn read_contract() {
        let g = cycle();
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(g.count_nodes(), 3);
        assert_eq!(g.count_edges(), 3);
        assert_eq!(g.out_neighbours(&"a").unwrap().copied().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(g.out_degree(&"c").unwrap(), 1);
        assert!(g.has_node(&"b"));
        assert!(!g.has_node(&"z"));
    }

    #[test]
    fn unknown_vertex_is_an_error() {
        let g = cycle();
        assert!(matches!(
            g.out_neighbours(&"z"),
            Err(GraphError::UndefinedVertex(ref id)) if id == "\"z\""
        ));
        assert!(g.out_degree(&"z").is_err());
    }

    #[test]
    fn implicit_vertices_are_rejected() {
        let result = DiGraph::from_adjacency([("a", vec!["b"])]);
        assert!(matches!(result, Err(GraphError::UndefinedVertex(_))));
    }

    #[test]
    fn self_loops_and_duplicates_are_dropped() {
        let mut builder = GraphBuilder::new();
        assert!(builder.add_edge(1u64, 2));
        assert!(!builder.add_edge(1, 2));
        assert!(!builder.add_edge(3, 3));
        let g = builder.build();
        assert_eq!(g.count_nodes(), 3);
        assert_eq!(g.count_edges(), 1);
        assert_eq!(g.out_degree(&3).unwrap(), 0);
    }

    #[test]
    fn anti_parallel_edges_collapse_when_undirected() {
        let g = DiGraph::from_adjacency([("a", vec!["b"]), ("b", vec!["a", "c"]), ("c", vec![])])
            .unwrap();
        assert_eq!(g.count_edges(), 3);
        assert_eq!(g.count_undirected_edges(), 2);
        assert_eq!(g.undirected_edges(), vec![(&"a", &"b"), (&"b", &"c")]);

        let u = g.to_undirected();
        assert_eq!(u.count_edges(), 4);
        assert_eq!(u.count_undirected_edges(), 2);
        assert_eq!(u.out_neighbours(&"c").unwrap().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn display_lists_vertices_and_edges() {
        let g = DiGraph::from_adjacency([("a", vec!["b"]), ("b", vec![])]).unwrap();
        assert_eq!(g.to_string(), "vertices: \"a\" \"b\"\nedges: (\"a\", \"b\")");
    }

    #[test]
    fn undirected_views_agree() {
        proptest!(|(g in build_graph_strat(40, 12))| {
            let undirected = g.to_undirected();
            prop_assert_eq!(undirected.count_edges(), 2 * g.count_undirected_edges());
            prop_assert_eq!(g.undirected_edges().len(), g.count_undirected_edges());
            prop_assert_eq!(undirected.count_undirected_edges(), g.count_undirected_edges());
            for (src, dst) in g.edges() {
                prop_assert!(g.has_node(src) && g.has_node(dst));
                prop_assert_ne!(src, dst);
            }
        });
    }
}
