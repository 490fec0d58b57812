use log::debug;

use crate::algorithm::{SpanningTreeAlgorithm, SpanningTreeResult};
use crate::data_structures::UnionFind;
use crate::graph::{Graph, UndirectedGraph, Weight};
use crate::{Error, Result};

/// Kruskal-style spanning tree over the graph's weight-ordered edge list.
///
/// Only edge flags are written; vertex distances, predecessors and the heap are left
/// untouched, so this can run without a prior reset.
#[derive(Debug, Default)]
pub struct UnionFindSpanningTree;

impl UnionFindSpanningTree {
    pub fn new() -> Self {
        UnionFindSpanningTree
    }
}

impl<W> SpanningTreeAlgorithm<W> for UnionFindSpanningTree
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn compute_spanning_tree(&self, graph: &mut UndirectedGraph<W>) -> Result<SpanningTreeResult<W>> {
        let mut components = UnionFind::new(graph.vertex_count())?;
        let ordered: Vec<_> = graph
            .edges_by_weight()
            .filter_map(|id| graph.edge(id).map(|edge| (id, edge.endpoints(), edge.weight())))
            .collect();

        let mut total_weight = W::zero();
        let mut edge_count = 0;

        for (id, (a, b), weight) in ordered {
            // A failed union means both ends already share a tree
            if components.union(a, b)? {
                graph.mark_spanning(id);
                total_weight = total_weight
                    .checked_add(&weight)
                    .ok_or(Error::TotalWeightOverflow)?;
                edge_count += 1;
            }
        }

        debug!(
            "Kruskal selected {} edges, total weight {}, {} components",
            edge_count,
            total_weight,
            components.set_count()
        );
        Ok(SpanningTreeResult {
            total_weight,
            edge_count,
        })
    }
}
