//! Pivot selection.
//!
//! Every rule returns the index of an edge inside the range, not just a
//! weight, so the partition can always set the pivot edge itself aside. That
//! guarantees each split makes progress even when all weights are equal.

use rand::Rng;

use crate::config::PivotRule;
use crate::types::Edge;

/// Pick the pivot for `edges` (non-empty) in a graph of `n` vertices.
///
/// Root-k sampling permutes `edges`: the sample is swapped into the suffix.
/// `samples` is scratch space, cleared on entry.
pub fn select_pivot<R: Rng + ?Sized>(
    rule: &PivotRule,
    edges: &mut [Edge],
    n: usize,
    rng: &mut R,
    samples: &mut Vec<(f32, usize)>,
) -> usize {
    debug_assert!(!edges.is_empty());
    let len = edges.len();
    match rule {
        PivotRule::First => 0,
        PivotRule::Random => rng.gen_range(0..len),
        PivotRule::MedianOf3 => median_of_3(edges, 0, len / 2, len - 1),
        PivotRule::RandomMedianOf3 => {
            let i = rng.gen_range(0..len);
            let j = rng.gen_range(0..len);
            let k = rng.gen_range(0..len);
            median_of_3(edges, i, j, k)
        }
        PivotRule::RootK(quantile) => {
            let q = quantile.resolve(n, len);
            root_k(edges, q, rng, samples)
        }
    }
}

/// Index among `i`, `j`, `k` whose weight is the median of the three.
#[inline]
fn median_of_3(edges: &[Edge], i: usize, j: usize, k: usize) -> usize {
    let (wi, wj, wk) = (edges[i].w, edges[j].w, edges[k].w);
    if (wi <= wj) == (wj <= wk) {
        j
    } else if (wj <= wi) == (wi <= wk) {
        i
    } else {
        k
    }
}

/// Draw `max(sqrt(len), 1)` edges without replacement (partial Fisher-Yates
/// into the suffix), sort them by weight and return the one at quantile `q`.
fn root_k<R: Rng + ?Sized>(
    edges: &mut [Edge],
    q: f64,
    rng: &mut R,
    samples: &mut Vec<(f32, usize)>,
) -> usize {
    let len = edges.len();
    let k = ((len as f64).sqrt() as usize).clamp(1, len);

    samples.clear();
    for i in 0..k {
        let end = len - i;
        let j = rng.gen_range(0..end);
        edges.swap(j, end - 1);
        samples.push((edges[end - 1].w, end - 1));
    }
    samples.sort_unstable_by(|x, y| x.0.total_cmp(&y.0).then(x.1.cmp(&y.1)));

    let pick = ((q * (k - 1) as f64).round() as usize).min(k - 1);
    samples[pick].1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Quantile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn weights(ws: &[f32]) -> Vec<Edge> {
        ws.iter()
            .enumerate()
            .map(|(i, &w)| Edge::new(i as u32, i as u32 + 1, w))
            .collect()
    }

    fn shuffled(len: usize, seed: u64) -> Vec<Edge> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..len)
            .map(|i| Edge::new(0, 1, rng.gen_range(0.0..1000.0f32) + i as f32 * 1e-3))
            .collect()
    }

    #[test]
    fn test_first_and_median_of_3() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut scratch = Vec::new();
        let mut edges = weights(&[5.0, 9.0, 1.0, 7.0, 3.0]);
        assert_eq!(
            select_pivot(&PivotRule::First, &mut edges, 6, &mut rng, &mut scratch),
            0
        );
        // first=5, mid=1, last=3 -> median 3 at index 4
        assert_eq!(
            select_pivot(&PivotRule::MedianOf3, &mut edges, 6, &mut rng, &mut scratch),
            4
        );
    }

    #[test]
    fn test_median_of_3_all_orders() {
        for (ws, expect) in [
            ([1.0, 2.0, 3.0], 1),
            ([3.0, 2.0, 1.0], 1),
            ([2.0, 1.0, 3.0], 0),
            ([2.0, 3.0, 1.0], 0),
            ([1.0, 3.0, 2.0], 2),
            ([3.0, 1.0, 2.0], 2),
            ([4.0, 4.0, 4.0], 1),
        ] {
            let edges = weights(&ws);
            assert_eq!(median_of_3(&edges, 0, 1, 2), expect, "{:?}", ws);
        }
    }

    #[test]
    fn test_random_pivot_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut scratch = Vec::new();
        let mut edges = shuffled(37, 3);
        for rule in [PivotRule::Random, PivotRule::RandomMedianOf3] {
            for _ in 0..100 {
                let p = select_pivot(&rule, &mut edges, 10, &mut rng, &mut scratch);
                assert!(p < edges.len());
            }
        }
    }

    #[test]
    fn test_root_k_quantile_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut scratch = Vec::new();
        for (q, want_min) in [(0.0, true), (1.0, false)] {
            let mut edges = shuffled(100, 5);
            let mut before: Vec<f32> = edges.iter().map(|e| e.w).collect();
            let rule = PivotRule::RootK(Quantile::Fixed(q));
            let p = select_pivot(&rule, &mut edges, 10, &mut rng, &mut scratch);

            // Sample of 10 lives in the suffix and the pivot is one of them.
            assert!(p >= 90);
            let suffix = edges[90..].iter().map(|e| e.w);
            let extreme = if want_min {
                suffix.fold(f32::INFINITY, f32::min)
            } else {
                suffix.fold(f32::NEG_INFINITY, f32::max)
            };
            assert_eq!(edges[p].w, extreme);

            // Sampling only permutes.
            let mut after: Vec<f32> = edges.iter().map(|e| e.w).collect();
            before.sort_by(f32::total_cmp);
            after.sort_by(f32::total_cmp);
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_root_k_single_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut scratch = Vec::new();
        let mut edges = weights(&[2.5]);
        let rule = PivotRule::RootK(Quantile::Median);
        assert_eq!(select_pivot(&rule, &mut edges, 2, &mut rng, &mut scratch), 0);
    }
}
