use log::debug;

use crate::algorithm::{SpanningTreeAlgorithm, SpanningTreeResult};
use crate::graph::{UndirectedGraph, Weight};
use crate::{Error, Result};

/// Prim-style spanning tree grown from the source through the shared heap.
///
/// A vertex's key is the weight of the cheapest edge joining it to the tree. The edge
/// that last lowered a key is remembered on the vertex; once that vertex is settled,
/// the remembered edge is found again among its edges to known vertices and flagged.
///
/// When the graph is disconnected, every unreached vertex popped from the heap roots
/// a new tree, so the result is a minimum spanning forest.
#[derive(Debug, Default)]
pub struct FrontierSpanningTree;

impl FrontierSpanningTree {
    pub fn new() -> Self {
        FrontierSpanningTree
    }
}

impl<W> SpanningTreeAlgorithm<W> for FrontierSpanningTree
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn compute_spanning_tree(&self, graph: &mut UndirectedGraph<W>) -> Result<SpanningTreeResult<W>> {
        graph.begin_heap_pass()?;

        let mut total_weight = W::zero();
        let mut edge_count = 0;

        while let Some(min) = graph.settle_min() {
            let admitted_by = graph.vertex(min)?.admitted_by;

            for (edge, neighbor, weight) in graph.incident(min) {
                let (known, key) = {
                    let target = graph.vertex(neighbor)?;
                    (target.is_known(), target.distance)
                };

                if known {
                    if admitted_by == Some(edge) {
                        graph.mark_spanning(edge);
                        total_weight = total_weight
                            .checked_add(&weight)
                            .ok_or(Error::TotalWeightOverflow)?;
                        edge_count += 1;
                    }
                    continue;
                }

                // Keyed by the raw edge weight, not the path cost
                if weight < key {
                    graph.lower_key(neighbor, weight, min, edge);
                }
            }
        }

        debug!("Prim selected {} edges, total weight {}", edge_count, total_weight);
        Ok(SpanningTreeResult {
            total_weight,
            edge_count,
        })
    }
}
