use std::env;
use std::io;
use std::time::{Duration, Instant};

use span_paths::graph::generators::complete_edge_list;
use span_paths::input::EdgeList;
use span_paths::{SpanningStrategy, UndirectedGraph};

// Times one pass over a freshly reset graph
fn time_pass<F, T>(graph: &mut UndirectedGraph<u64>, pass: F) -> span_paths::Result<(Duration, T)>
where
    F: FnOnce(&mut UndirectedGraph<u64>) -> span_paths::Result<T>,
{
    graph.reset_state();
    let start = Instant::now();
    let value = pass(graph)?;
    Ok((start.elapsed(), value))
}

fn benchmark(size: usize) -> span_paths::Result<(Duration, Duration, Duration)> {
    let mut rng = rand::thread_rng();
    let edge_list = complete_edge_list(size, &mut rng);

    let start = Instant::now();
    let mut graph = edge_list.build::<u64>()?;
    println!(
        "Built complete graph with {} vertices and {} edges in {:?}",
        size,
        edge_list.edges.len(),
        start.elapsed()
    );

    let (dijkstra, reachable) = time_pass(&mut graph, |g| {
        Ok(g.run_shortest_paths()?.reachable_count() as u64)
    })?;
    println!("  - Dijkstra reached {} vertices in {:?}", reachable, dijkstra);

    let (prim, prim_tree) = time_pass(&mut graph, |g| SpanningStrategy::Frontier.run(g))?;
    println!("  - Frontier spanning tree weighs {} ({:?})", prim_tree.total_weight, prim);

    let (kruskal, kruskal_tree) = time_pass(&mut graph, |g| SpanningStrategy::UnionFind.run(g))?;
    println!("  - Union-find spanning tree weighs {} ({:?})", kruskal_tree.total_weight, kruskal);

    prim_tree.agrees_with(&kruskal_tree)?;
    Ok((dijkstra, prim, kruskal))
}

fn main() -> span_paths::Result<()> {
    env_logger::init();

    // `--emit N` prints a generated complete graph in edge-list format instead
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 && args[1] == "--emit" {
        let size: usize = args[2]
            .parse()
            .map_err(|_| span_paths::Error::Config(format!("invalid size '{}'", args[2])))?;
        let edge_list: EdgeList = complete_edge_list(size, &mut rand::thread_rng());
        return edge_list.write_to(&mut io::stdout().lock());
    }

    let graph_sizes = vec![100, 200, 400, 800];

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs frontier and union-find spanning trees");
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        println!("\nGenerating complete graph with {} vertices...", size);
        results.push((size, benchmark(size)?));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<15}", "Vertices", "Dijkstra (us)", "Frontier (us)", "Union-find (us)");
    println!("-----------------------------------------------------");

    for (size, (dijkstra, prim, kruskal)) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15}",
            size,
            dijkstra.as_micros(),
            prim.as_micros(),
            kruskal.as_micros()
        );
    }
    Ok(())
}
