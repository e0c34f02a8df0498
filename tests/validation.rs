mod support;

use filter_kruskal::validation::{reference_mst, validate};
use filter_kruskal::{solve_with, Algorithm, MstConfig};
use support::graphs::{random_multigraph, random_uniform};

#[test]
fn test_validation_basic() {
    let n = 100;
    let edges = random_uniform(n, 2000, 0);
    for algorithm in Algorithm::all() {
        let out = solve_with(&mut edges.clone(), n, &MstConfig::new(algorithm)).unwrap();
        let report = validate(&edges, n, &out);
        assert!(report.is_valid(), "Expected valid MST from {}: {}", algorithm, report);
        assert_eq!(report.cycle_edges, 0);
        assert_eq!(report.foreign_edges, 0);
        assert_eq!(report.expected_edges, n - 1);
    }
}

#[test]
fn test_validation_forest() {
    // 300 edges on 2000 vertices: mostly isolated vertices.
    let n = 2000;
    let edges = random_multigraph(n, 300, 10, 4);
    let (expected, _) = reference_mst(&edges, n);
    let out = solve_with(&mut edges.clone(), n, &MstConfig::new(Algorithm::super_kruskal())).unwrap();
    let report = validate(&edges, n, &out);

    assert!(report.is_valid(), "{}", report);
    assert_eq!(report.components, n - expected);
    assert!(report.components >= n - 300, "{}", report);
}
