use serde::{Deserialize, Serialize};
use std::{fmt::Debug, hash::Hash};

/// Dense index of a vertex inside a graph.
///
/// Indices are assigned in insertion order and never move once the graph is built, so they
/// can be used to address per-vertex state stored in plain vectors.
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
pub struct VID(pub usize);

impl VID {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn as_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl From<usize> for VID {
    fn from(id: usize) -> Self {
        VID(id)
    }
}

impl From<VID> for usize {
    fn from(id: VID) -> Self {
        id.0
    }
}

/// Opaque vertex identifier.
///
/// Anything hashable, comparable and cheap enough to clone qualifies, most commonly `u64`
/// for generated graphs and `String` for graphs read from edge-list files.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}
