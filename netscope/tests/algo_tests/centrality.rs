use std::collections::HashMap;

use netscope::{
    algorithms::centrality::{
        betweenness::betweenness_centrality,
        eigenvector::eigenvector_centrality,
        katz::{katz_centrality, katz_spread_centrality},
        top_centers, Centrality, EigenvectorParams, KatzParams,
    },
    prelude::*,
};

use super::{assert_scores_approx, path, symmetric_cycle};

fn all_centralities() -> [Centrality; 4] {
    [
        Centrality::Betweenness,
        Centrality::Eigenvector(EigenvectorParams::default()),
        Centrality::Katz(KatzParams::default()),
        Centrality::KatzSpread(KatzParams::default()),
    ]
}

#[test]
fn test_betweenness_centrality() {
    let vs = vec![
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (3, 5),
        (3, 6),
        (4, 3),
        (4, 2),
        (4, 4),
    ];
    let mut builder = GraphBuilder::new();
    for (src, dst) in &vs {
        builder.add_edge(*src as u64, *dst as u64);
    }
    let graph = builder.build();

    let expected: HashMap<u64, f64> =
        HashMap::from([(1, 0.0), (2, 1.0), (3, 4.0), (4, 1.0), (5, 0.0), (6, 0.0)]);
    let result = betweenness_centrality(&graph);
    assert_scores_approx(&result, &expected, 1e-9);
    assert_eq!(result.convergence(), Convergence::Exact);
}

#[test]
fn betweenness_on_a_directed_path() {
    let graph = path(&["a", "b", "c", "d"]);
    let result = betweenness_centrality(&graph);
    assert_eq!(result.get(&"a"), Some(0.0));
    assert_eq!(result.get(&"b"), Some(2.0));
    assert_eq!(result.get(&"c"), Some(2.0));
    assert_eq!(result.get(&"d"), Some(0.0));
}

#[test]
fn edgeless_graph_has_finite_scores() {
    let mut builder = GraphBuilder::new();
    for v in ["x", "y", "z"] {
        builder.add_node(v);
    }
    let graph = builder.build();

    for centrality in all_centralities() {
        let result = centrality.run(&graph).unwrap();
        assert_eq!(result.len(), 3, "{centrality}");
        assert!(result.values().all(f64::is_finite), "{centrality}");
    }
    let katz = katz_centrality(&graph, KatzParams::default()).unwrap();
    assert!(katz.values().all(|s| s == 0.0));
}

#[test]
fn symmetric_cycle_scores_are_uniform() {
    let graph = symmetric_cycle(9);

    let eigenvector = eigenvector_centrality(&graph, EigenvectorParams::default()).unwrap();
    assert!(eigenvector.is_converged());
    assert!(eigenvector.values().all(|s| (s - 1.0).abs() < 1e-12));

    for result in [
        katz_centrality(&graph, KatzParams::default()).unwrap(),
        katz_spread_centrality(&graph, KatzParams::default()).unwrap(),
    ] {
        let first = result.values().next().unwrap();
        assert!(result.values().all(|s| (s - first).abs() < 1e-9));
    }

    let betweenness = betweenness_centrality(&graph);
    let first = betweenness.values().next().unwrap();
    assert!(betweenness.values().all(|s| (s - first).abs() < 1e-9));
}

#[test]
fn katz_variants_rank_opposite_ends_of_a_chain() {
    let graph = path(&["a", "b", "c", "d"]);
    let pull = top_centers(&graph, 1, Centrality::Katz(KatzParams::default())).unwrap();
    let push = top_centers(&graph, 1, Centrality::KatzSpread(KatzParams::default())).unwrap();
    assert_eq!(pull.vertices, vec!["a"]);
    assert_eq!(push.vertices, vec!["d"]);
}

#[test]
fn top_centers_returns_min_of_k_and_vertex_count() {
    let graph = symmetric_cycle(5);
    for centrality in all_centralities() {
        for k in [0, 3, 5, 12] {
            let top = top_centers(&graph, k, centrality).unwrap();
            assert_eq!(top.len(), k.min(5));
            assert!(top.scores.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let graph = symmetric_cycle(3);
    let bad_alpha = KatzParams {
        alpha: -1.0,
        ..KatzParams::default()
    };
    assert!(matches!(
        top_centers(&graph, 1, Centrality::Katz(bad_alpha)),
        Err(GraphError::InvalidParameter { name: "alpha", .. })
    ));
    let bad_confidence = EigenvectorParams {
        confidence: 0.0,
        ..EigenvectorParams::default()
    };
    assert!(eigenvector_centrality(&graph, bad_confidence).is_err());
}
