use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{infinity, UndirectedGraph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over the graph's shared indexed heap
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &mut UndirectedGraph<W>) -> Result<ShortestPathResult<W>> {
        graph.begin_heap_pass()?;

        let mut settled = 0;
        let mut overflowed = Vec::new();
        while let Some(min) = graph.settle_min() {
            settled += 1;
            let base = graph.vertex(min)?.distance;
            // Nothing left on the heap is reachable either
            if base == infinity() {
                continue;
            }

            // Relax every edge towards a vertex that is still on the frontier
            for (edge, neighbor, weight) in graph.incident(min) {
                let target = graph.vertex(neighbor)?;
                if target.is_known() {
                    continue;
                }

                // A finite distance equal to the sentinel would read as unreached
                let candidate = match base.checked_add(&weight) {
                    Some(sum) if sum != infinity() => sum,
                    _ => {
                        overflowed.push(neighbor);
                        continue;
                    }
                };
                if candidate < target.distance {
                    graph.lower_key(neighbor, candidate, min, edge);
                }
            }
        }

        // Reachable only through a sum the weight type cannot hold
        for vertex in overflowed {
            if graph.vertex(vertex)?.distance == infinity() {
                return Err(Error::DistanceOverflow(vertex));
            }
        }

        let result = ShortestPathResult::from_graph(graph);
        debug!(
            "Dijkstra settled {} vertices, {} reachable from {}",
            settled,
            result.reachable_count(),
            result.source
        );
        Ok(result)
    }
}
