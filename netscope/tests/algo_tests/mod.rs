use netscope::prelude::*;
use std::collections::HashMap;

mod centrality;
mod diffusion;
mod generators;
mod loader;
mod metrics;

fn assert_scores_approx<V: NodeId + std::fmt::Display>(
    result: &AlgorithmResult<V>,
    expected: &HashMap<V, f64>,
    precision: f64,
) {
    assert_eq!(result.len(), expected.len(), "results have different lengths");

    for (v, &want) in expected {
        let got = result
            .get(v)
            .unwrap_or_else(|| panic!("Missing vertex: {}", v));
        let diff = (got - want).abs();
        assert!(
            diff <= precision,
            "Value mismatch for vertex '{}': {} != {} (diff: {})",
            v,
            got,
            want,
            diff
        );
    }
}

fn symmetric_cycle(n: u64) -> DiGraph<u64> {
    let mut builder = GraphBuilder::new();
    for i in 0..n {
        builder.add_edge(i, (i + 1) % n);
        builder.add_edge((i + 1) % n, i);
    }
    builder.build()
}

fn path(ids: &[&'static str]) -> DiGraph<&'static str> {
    let mut builder = GraphBuilder::new();
    for pair in ids.windows(2) {
        builder.add_edge(pair[0], pair[1]);
    }
    builder.build()
}
