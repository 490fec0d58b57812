use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use span_paths::graph::generators::complete_edge_list;
use span_paths::UndirectedGraph;

fn complete_graph(n: usize) -> UndirectedGraph<u64> {
    let mut rng = StdRng::seed_from_u64(7);
    complete_edge_list(n, &mut rng)
        .build()
        .expect("generated edge list is valid")
}

fn bench_passes(c: &mut Criterion) {
    let mut graph = complete_graph(200);

    c.bench_function("dijkstra_complete_200", |b| {
        b.iter(|| {
            graph.reset_state();
            black_box(graph.run_shortest_paths().expect("fresh state"))
        })
    });

    c.bench_function("frontier_mst_complete_200", |b| {
        b.iter(|| {
            graph.reset_state();
            black_box(graph.run_spanning_tree_by_frontier().expect("fresh state"))
        })
    });

    c.bench_function("union_find_mst_complete_200", |b| {
        b.iter(|| black_box(graph.run_spanning_tree_by_union_find().expect("valid graph")))
    });
}

criterion_group!(benches, bench_passes);
criterion_main!(benches);
