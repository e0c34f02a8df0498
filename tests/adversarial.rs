//! Inputs that break naive quicksort-style partitioning: heavy duplicates,
//! constant weights, presorted edge lists and poor pivot rules.

mod support;

use filter_kruskal::graph::{generate, random_graph_quantized, GraphKind};
use filter_kruskal::{
    sort_by_weight, solve_with, Algorithm, Edge, FilterKruskalConfig, MstConfig, PartitionScheme,
    PivotRule, Recursion,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use support::graphs::{assert_cost_eq, path_plus_noise, random_uniform, run};

fn first_pivot(partition: PartitionScheme, recursion: Recursion) -> Algorithm {
    Algorithm::FilterKruskal(FilterKruskalConfig {
        threshold: 4,
        pivot: PivotRule::First,
        partition,
        recursion,
        ..Default::default()
    })
}

#[test]
fn test_duplicate_heavy_two_way_matches_three_way() {
    let n = 3000;
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let edges = random_graph_quantized(&mut rng, n, 60_000, 4);
    let reference = run(&edges, n, Algorithm::Kruskal, 0);

    let two = run(&edges, n, Algorithm::filter_kruskal(), 1);
    let three = run(&edges, n, Algorithm::three_way(), 1);
    assert_eq!(two.num_edges, reference.num_edges);
    assert_eq!(three.num_edges, reference.num_edges);
    assert_eq!(two.cost, reference.cost, "integer weights sum exactly");
    assert_eq!(three.cost, reference.cost);

    for algorithm in Algorithm::all() {
        let out = run(&edges, n, algorithm, 3);
        assert_eq!(out.cost, reference.cost, "{}", algorithm);
    }
}

#[test]
fn test_all_equal_weights_terminate() {
    let n = 500;
    let mut edges = random_uniform(n, 20_000, 4);
    for e in &mut edges {
        e.w = 2.5;
    }
    let reference = run(&edges, n, Algorithm::Kruskal, 0);
    assert_eq!(reference.num_edges, n - 1);

    let mut variants = Algorithm::all();
    for partition in [PartitionScheme::TwoWay, PartitionScheme::ThreeWay] {
        for recursion in [Recursion::Recursive, Recursion::Iterative] {
            variants.push(first_pivot(partition, recursion));
        }
    }
    for algorithm in variants {
        let out = run(&edges, n, algorithm, 9);
        assert_eq!(out.num_edges, n - 1, "{:?}", algorithm);
        assert_eq!(out.cost, 2.5 * (n - 1) as f64, "{:?}", algorithm);
    }
}

#[test]
fn test_three_way_collapses_constant_weights() {
    let n = 200;
    let mut edges = random_uniform(n, 5000, 5);
    for e in &mut edges {
        e.w = 1.0;
    }
    let out = run(&edges, n, first_pivot(PartitionScheme::ThreeWay, Recursion::Recursive), 0);
    // One split puts everything in the middle; no fallback needed.
    assert_eq!(out.stats.partitions, 1);
    assert_eq!(out.stats.degenerate_fallbacks, 0);
    assert_eq!(out.num_edges, n - 1);
}

#[test]
fn test_sorted_and_reverse_sorted_inputs() {
    let n = 1000;
    let base = random_uniform(n, 30_000, 6);
    let reference = run(&base, n, Algorithm::Kruskal, 0);

    let mut ascending = base.clone();
    sort_by_weight(&mut ascending);
    let mut descending = ascending.clone();
    descending.reverse();

    for edges in [&ascending, &descending] {
        let mut variants = Algorithm::all();
        for partition in [PartitionScheme::TwoWay, PartitionScheme::ThreeWay] {
            for recursion in [Recursion::Recursive, Recursion::Iterative] {
                variants.push(first_pivot(partition, recursion));
            }
        }
        for algorithm in variants {
            let out = run(edges, n, algorithm, 10);
            assert_eq!(out.num_edges, reference.num_edges, "{:?}", algorithm);
            assert_cost_eq(out.cost, reference.cost, &format!("{:?}", algorithm));
        }
    }
}

#[test]
fn test_first_pivot_on_sorted_input_falls_back() {
    // Descending weights: the first edge is the maximum, so a two-way split
    // leaves all but the pivot on the light side.
    let n = 400;
    let mut edges = path_plus_noise(n, 4000, 12);
    sort_by_weight(&mut edges);
    edges.reverse();

    let out = run(&edges, n, first_pivot(PartitionScheme::TwoWay, Recursion::Recursive), 0);
    assert_eq!(out.num_edges, n - 1);
    assert_eq!(out.cost, (n - 1) as f64);
    assert!(out.stats.degenerate_fallbacks > 0, "{:?}", out.stats);
}

#[test]
fn test_deep_iterative_recursion() {
    // A path with distinct weights: every edge is a tree edge, so nothing is
    // filtered and the driver has to split all the way down.
    let n = 20_000;
    let mut edges: Vec<Edge> = (1..n as u32).map(|v| Edge::new(v - 1, v, v as f32)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    edges.shuffle(&mut rng);

    let algorithm = Algorithm::FilterKruskal(FilterKruskalConfig {
        threshold: 1,
        pivot: PivotRule::MedianOf3,
        recursion: Recursion::Iterative,
        ..Default::default()
    });
    let out = run(&edges, n, algorithm, 0);
    assert_eq!(out.num_edges, n - 1);
    assert!(out.stats.max_depth > 10);
}

#[test]
fn test_generated_duplicate_graph() {
    let n = 2000;
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let edges = generate(GraphKind::Duplicates, n, 50_000, &mut rng);
    let reference = run(&edges, n, Algorithm::Kruskal, 0);
    for algorithm in Algorithm::all() {
        let out = run(&edges, n, algorithm, 4);
        assert_eq!(out.num_edges, reference.num_edges, "{}", algorithm);
        assert_eq!(out.cost, reference.cost, "{}", algorithm);
    }
}

#[test]
fn test_infinite_and_signed_zero_weights() {
    let edges = vec![
        Edge::new(0, 1, f32::INFINITY),
        Edge::new(1, 2, -0.0),
        Edge::new(2, 3, 0.0),
        Edge::new(3, 0, f32::NEG_INFINITY),
        Edge::new(0, 2, f32::INFINITY),
    ];
    for algorithm in Algorithm::all() {
        let mut work = edges.clone();
        let out = solve_with(&mut work, 4, &MstConfig::new(algorithm)).unwrap();
        assert_eq!(out.num_edges, 3, "{}", algorithm);
        assert_eq!(out.cost, f64::NEG_INFINITY, "{}", algorithm);
    }
}
