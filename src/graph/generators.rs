use rand::prelude::*;

use crate::input::EdgeList;

/// Generates a complete graph on `n` vertices.
///
/// Every edge gets a distinct weight from `1..=n(n-1)/2`; weights and edge order are
/// both shuffled and the source is picked uniformly, so the minimum spanning tree is unique.
pub fn complete_edge_list<R: Rng>(n: usize, rng: &mut R) -> EdgeList {
    assert!(n > 0, "n must be positive");

    let edge_total = n * (n - 1) / 2;
    let mut weights: Vec<u64> = (1..=edge_total as u64).collect();
    weights.shuffle(rng);

    let mut list = EdgeList::new(n, rng.gen_range(1..=n));
    let mut weights = weights.into_iter();
    for a in 1..=n {
        for b in (a + 1)..=n {
            if let Some(weight) = weights.next() {
                list.edges.push((a, b, weight));
            }
        }
    }
    list.edges.shuffle(rng);
    list
}

/// Generates a connected graph: a random spanning path plus `extra_edges` random edges.
///
/// Extra edges may repeat an existing pair, producing parallel edges; self-loops are skipped.
pub fn random_connected_edge_list<R: Rng>(
    n: usize,
    extra_edges: usize,
    max_weight: u64,
    rng: &mut R,
) -> EdgeList {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut order: Vec<usize> = (1..=n).collect();
    order.shuffle(rng);

    let mut list = EdgeList::new(n, rng.gen_range(1..=n));
    for pair in order.windows(2) {
        list.edges.push((pair[0], pair[1], rng.gen_range(1..=max_weight)));
    }

    if n > 1 {
        let mut added = 0;
        while added < extra_edges {
            let a = rng.gen_range(1..=n);
            let b = rng.gen_range(1..=n);
            if a != b {
                list.edges.push((a, b, rng.gen_range(1..=max_weight)));
                added += 1;
            }
        }
    }

    list.edges.shuffle(rng);
    list
}
