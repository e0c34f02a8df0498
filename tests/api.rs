//! Public API integration tests for filter-kruskal.

mod support;

use filter_kruskal::graph::{self, io, GraphKind};
use filter_kruskal::{
    solve, solve_with, Algorithm, Edge, FilterKruskalConfig, FilterPolicy, MstConfig, MstError,
    PartitionScheme, PivotRule, Quantile, Recursion,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use support::graphs::{edge_keys, random_multigraph, random_uniform};

#[test]
fn test_solve_basic() {
    let mut edges = random_uniform(100, 2000, 12345);
    let out = solve(&mut edges, 100).expect("solve should succeed");
    assert!(out.is_spanning_tree(100));
    assert_eq!(out.edges.len(), 99);
    assert!(out.require_spanning(100).is_ok());
    assert!(out.stats.partitions > 0);
}

#[test]
fn test_input_errors() {
    assert!(matches!(
        solve(&mut [], 0),
        Err(MstError::InvalidVertexCount(0))
    ));

    let mut edges = vec![Edge::new(0, 1, 1.0), Edge::new(1, 9, 1.0)];
    assert!(matches!(
        solve(&mut edges, 5),
        Err(MstError::VertexOutOfRange { edge: 1, vertex: 9, n: 5 })
    ));

    let mut edges = vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, f32::NAN)];
    let err = solve(&mut edges, 3).unwrap_err();
    assert_eq!(err, MstError::NanWeight { edge: 1 });
    assert!(err.to_string().contains("NaN"));
}

#[test]
fn test_disconnected_is_a_forest() {
    let mut edges = vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 2.0)];
    let out = solve(&mut edges, 6).unwrap();
    assert_eq!(out.num_edges, 2);
    assert_eq!(out.num_components(6), 4);
    assert_eq!(
        out.require_spanning(6),
        Err(MstError::Disconnected { components: 4 })
    );
}

#[test]
fn test_same_seed_same_result() {
    let n = 2000;
    let edges = random_multigraph(n, 40_000, 1000, 8);
    for algorithm in Algorithm::all() {
        let config = MstConfig::new(algorithm).with_seed(99);
        let a = solve_with(&mut edges.clone(), n, &config).unwrap();
        let b = solve_with(&mut edges.clone(), n, &config).unwrap();
        assert_eq!(a.cost, b.cost, "{}", algorithm);
        assert_eq!(a.edges, b.edges, "{}", algorithm);
        assert_eq!(a.stats, b.stats, "{}", algorithm);
    }
}

#[test]
fn test_input_is_permuted_not_changed() {
    let original = random_uniform(300, 5000, 2);
    let mut edges = original.clone();
    solve(&mut edges, 300).unwrap();
    assert_eq!(edge_keys(&original), edge_keys(&edges));
}

#[test]
fn test_buffer_stays_a_permutation() {
    // Dense enough that every filtering solver drops most edges.
    let n = 1000;
    let inputs = [random_uniform(n, 60_000, 7), random_multigraph(n, 60_000, 5, 8)];

    let mut variants = Algorithm::all();
    variants.push(Algorithm::FilterKruskal(FilterKruskalConfig {
        filter: FilterPolicy::Eager,
        ..Default::default()
    }));
    variants.push(Algorithm::FilterKruskal(FilterKruskalConfig {
        filter: FilterPolicy::Eager,
        partition: PartitionScheme::ThreeWay,
        recursion: Recursion::Iterative,
        ..Default::default()
    }));

    for original in &inputs {
        let expected = edge_keys(original);
        for &algorithm in &variants {
            for partial in [false, true] {
                let config = MstConfig::new(algorithm).with_seed(3).with_partial_mst(partial);
                let mut edges = original.clone();
                solve_with(&mut edges, n, &config).unwrap();
                assert_eq!(edge_keys(&edges), expected, "{} partial={}", algorithm, partial);
            }
        }
    }
}

#[test]
fn test_cost_only_mode() {
    let n = 500;
    let edges = random_uniform(n, 10_000, 3);
    let full = solve_with(&mut edges.clone(), n, &MstConfig::default()).unwrap();
    let lean = solve_with(&mut edges.clone(), n, &MstConfig::default().cost_only()).unwrap();
    assert!(lean.edges.is_empty());
    assert_eq!(lean.num_edges, full.num_edges);
    assert_eq!(lean.cost, full.cost);
}

#[test]
fn test_algorithm_names() {
    for name in Algorithm::NAMES {
        let algorithm: Algorithm = name.parse().unwrap();
        assert_eq!(algorithm.to_string(), *name);
    }
    assert_eq!(
        "FilterKruskal3".parse::<Algorithm>().unwrap(),
        Algorithm::three_way()
    );
    assert!(matches!(
        "bogosort".parse::<Algorithm>(),
        Err(MstError::UnknownName { kind: "algorithm", .. })
    ));

    let skewed = "skewed:2.5".parse::<PivotRule>().unwrap();
    assert_eq!(skewed, PivotRule::RootK(Quantile::Skewed { factor: 2.5 }));
}

#[test]
fn test_graph_kind_names() {
    for kind in GraphKind::ALL {
        assert_eq!(kind.to_string().parse::<GraphKind>().unwrap(), kind);
    }
    assert_eq!("hardgraph".parse::<GraphKind>().unwrap(), GraphKind::OneLong);
    assert!(matches!(
        "torus".parse::<GraphKind>(),
        Err(MstError::UnknownName { kind: "graph", .. })
    ));
}

#[test]
fn test_generated_graphs_solve() {
    let n = 1000;
    for kind in GraphKind::ALL {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let edges = graph::generate(kind, n, 20_000, &mut rng);
        assert!(!edges.is_empty(), "{}", kind);
        assert!(graph::vertex_count(&edges) <= n);

        let out = solve(&mut edges.clone(), n).unwrap();
        let reference = solve_with(&mut edges.clone(), n, &MstConfig::new(Algorithm::Kruskal)).unwrap();
        assert_eq!(out.num_edges, reference.num_edges, "{}", kind);
        assert!((out.cost - reference.cost).abs() <= 1e-9 * reference.cost.max(1.0));
    }
}

#[test]
fn test_edge_file_round_trip() {
    let edges = random_uniform(50, 400, 21);
    let dir = std::env::temp_dir();
    for name in ["fk_api_round_trip.txt", "fk_api_round_trip.bin"] {
        let path = dir.join(format!("{}-{}", std::process::id(), name));
        io::save(&path, &edges).unwrap();
        let loaded = io::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, edges, "{}", name);

        let a = solve(&mut edges.clone(), 50).unwrap();
        let b = solve(&mut loaded.clone(), 50).unwrap();
        assert_eq!(a.cost, b.cost);
    }
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("fk_api_definitely_missing.txt");
    assert!(matches!(io::load(&path), Err(MstError::Io(_))));
}
