//! The read-only adjacency contract.
//!
//! The diffusion simulator does not care how a graph is stored, only that it can list the
//! vertices and the out-neighbours of each of them. [`Adjacency`] captures exactly that and is
//! implemented for [`DiGraph`] as well as for plain map-of-sets adjacency structures.

use crate::db::graph::DiGraph;
use indexmap::{IndexMap, IndexSet};
use netscope_api::core::entities::NodeId;
use std::{
    collections::{HashMap, HashSet},
    hash::BuildHasher,
};

pub trait Adjacency {
    type Node: NodeId;

    /// All vertices, each exactly once.
    ///
    /// Two equal adjacencies must list their vertices in the same order, since per-vertex
    /// random draws are made in this order.
    fn node_ids(&self) -> impl Iterator<Item = &Self::Node>;

    fn contains_node(&self, v: &Self::Node) -> bool;

    /// Out-neighbours of `v`, or `None` if `v` is not a vertex.
    fn neighbours_of(&self, v: &Self::Node) -> Option<impl Iterator<Item = &Self::Node>>;

    fn num_nodes(&self) -> usize {
        self.node_ids().count()
    }
}

impl<V: NodeId> Adjacency for DiGraph<V> {
    type Node = V;

    fn node_ids(&self) -> impl Iterator<Item = &V> {
        self.nodes()
    }

    fn contains_node(&self, v: &V) -> bool {
        self.has_node(v)
    }

    fn neighbours_of(&self, v: &V) -> Option<impl Iterator<Item = &V>> {
        self.out_neighbours(v).ok()
    }

    fn num_nodes(&self) -> usize {
        self.count_nodes()
    }
}

/// Vertices are listed in sorted order, as the map's own order depends on its hasher.
impl<V: NodeId + Ord, S: BuildHasher> Adjacency for HashMap<V, HashSet<V, S>, S> {
    type Node = V;

    fn node_ids(&self) -> impl Iterator<Item = &V> {
        let mut keys: Vec<&V> = self.keys().collect();
        keys.sort_unstable();
        keys.into_iter()
    }

    fn contains_node(&self, v: &V) -> bool {
        self.contains_key(v)
    }

    fn neighbours_of(&self, v: &V) -> Option<impl Iterator<Item = &V>> {
        self.get(v).map(|neighbours| neighbours.iter())
    }

    fn num_nodes(&self) -> usize {
        self.len()
    }
}

impl<V: NodeId, S: BuildHasher> Adjacency for IndexMap<V, IndexSet<V, S>, S> {
    type Node = V;

    fn node_ids(&self) -> impl Iterator<Item = &V> {
        self.keys()
    }

    fn contains_node(&self, v: &V) -> bool {
        self.contains_key(v)
    }

    fn neighbours_of(&self, v: &V) -> Option<impl Iterator<Item = &V>> {
        self.get(v).map(|neighbours| neighbours.iter())
    }

    fn num_nodes(&self) -> usize {
        self.len()
    }
}
