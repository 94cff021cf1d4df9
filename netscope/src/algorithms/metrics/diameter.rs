use crate::db::graph::DiGraph;
use netscope_api::core::entities::{NodeId, VID};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Result of running a breadth-first search from every vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Largest number of vertices reachable from a single root, root included.
    pub largest_component_nodes: usize,
    /// Half the summed out-degree of the vertices in that reachable set.
    ///
    /// This is the exact undirected edge count only when the explored neighbourhood is
    /// symmetric. On directed graphs with one-way edges it is an approximation.
    pub largest_component_edges: usize,
    /// Largest finite BFS distance observed from any root.
    pub diameter: usize,
}

/// BFS from every vertex over out-edges.
///
/// For each root the number of reached vertices, the out-degree sum of the reached vertices and
/// the root's eccentricity (within its reachable set) are recorded. The root reaching the most
/// vertices defines the largest component, the first such root winning ties; the diameter is
/// the largest eccentricity over all roots.
///
/// Runs in `O(V·(V + E))` time.
pub fn component_summary<V: NodeId>(g: &DiGraph<V>) -> ComponentSummary {
    let n = g.count_nodes();
    let mut summary = ComponentSummary::default();
    let mut dist: Vec<i64> = vec![-1; n];
    let mut queue: VecDeque<VID> = VecDeque::with_capacity(n);

    for root in g.vids() {
        dist.fill(-1);
        queue.clear();
        dist[root.index()] = 0;
        queue.push_back(root);

        let mut reached = 0usize;
        let mut degree_sum = 0usize;
        let mut eccentricity = 0i64;
        while let Some(current) = queue.pop_front() {
            reached += 1;
            let neighbours = g.out_vids(current);
            degree_sum += neighbours.len();
            let next_dist = dist[current.index()] + 1;
            for neighbour in neighbours {
                if dist[neighbour.index()] < 0 {
                    dist[neighbour.index()] = next_dist;
                    eccentricity = eccentricity.max(next_dist);
                    queue.push_back(*neighbour);
                }
            }
        }

        if reached > summary.largest_component_nodes {
            summary.largest_component_nodes = reached;
            summary.largest_component_edges = degree_sum / 2;
        }
        summary.diameter = summary.diameter.max(eccentricity as usize);
    }

    debug!(
        largest_component_nodes = summary.largest_component_nodes,
        largest_component_edges = summary.largest_component_edges,
        diameter = summary.diameter,
        "component summary computed"
    );
    summary
}

/// The largest finite shortest-path distance in the graph.
pub fn diameter<V: NodeId>(g: &DiGraph<V>) -> usize {
    component_summary(g).diameter
}
