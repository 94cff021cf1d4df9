use netscope::{
    algorithms::diffusion::linear_threshold::{linear_threshold, LinearThreshold},
    graphgen::random_graph::random_digraph,
    prelude::*,
};
use proptest::prelude::*;

use super::{path, symmetric_cycle};

#[test]
fn infection_only_grows() {
    proptest!(|(graph_seed in any::<u64>(), rng_seed in any::<u64>(), p in 0.0..0.4f64)| {
        let graph = random_digraph(25, p, Some(graph_seed)).unwrap();
        let seeds = [0u64, 1, 2];
        let diffusion = linear_threshold(&graph, seeds, Some(rng_seed)).unwrap();

        prop_assert!(seeds.iter().all(|s| diffusion.is_infected(s)));
        prop_assert_eq!(diffusion.round_sizes()[0], 3);
        prop_assert!(diffusion.round_sizes().windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(*diffusion.round_sizes().last().unwrap(), diffusion.num_infected());
        prop_assert!(diffusion.num_infected() <= graph.count_nodes());
    });
}

#[test]
fn larger_seed_sets_infect_supersets() {
    proptest!(|(graph_seed in any::<u64>(), rng_seed in any::<u64>())| {
        let graph = random_digraph(25, 0.15, Some(graph_seed)).unwrap();
        let small = linear_threshold(&graph, [0u64], Some(rng_seed)).unwrap();
        let large = linear_threshold(&graph, [0u64, 5, 10], Some(rng_seed)).unwrap();
        prop_assert!(small.infected().iter().all(|v| large.is_infected(v)));
    });
}

#[test]
fn diffusion_is_reproducible_with_a_seed() {
    let graph = random_digraph(40, 0.1, Some(3)).unwrap();
    let run = || {
        LinearThreshold::new(&graph)
            .seeds([0u64, 1])
            .rng_seed(Some(99))
            .run()
            .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn seeding_everything_converges_immediately() {
    let graph = symmetric_cycle(6);
    let diffusion = linear_threshold(&graph, graph.nodes().copied(), None).unwrap();
    assert_eq!(diffusion.round_sizes(), &[6]);
    assert_eq!(diffusion.rounds(), 0);
}

#[test]
fn sinks_never_activate() {
    // d has no out-neighbours, so nothing can pull it in
    let graph = path(&["a", "b", "c", "d"]);
    let diffusion = linear_threshold(&graph, ["a"], Some(1)).unwrap();
    assert_eq!(diffusion.num_infected(), 1);
    assert!(!diffusion.is_infected(&"d"));

    assert!(matches!(
        linear_threshold(&graph, ["nobody"], Some(1)),
        Err(GraphError::UndefinedVertex(_))
    ));
}
