use log::debug;
use serde::Serialize;

use crate::algorithm::SpanningStrategy;
use crate::graph::{Graph, UndirectedGraph, Weight};
use crate::Result;

/// Shortest path to one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub vertex: usize,
    /// Vertex ids from the source to `vertex`; just `[vertex]` when unreached
    pub path: Vec<usize>,
    /// `None` when the vertex was never reached
    pub distance: Option<u64>,
}

/// Edges and weight of the computed spanning tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTreeReport {
    pub strategy: SpanningStrategy,
    pub edges: Vec<(usize, usize)>,
    pub total_weight: u64,
}

/// Everything a full run produces, in structured and text form
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub vertex_count: usize,
    pub source: usize,
    pub shortest_paths: Vec<PathEntry>,
    pub spanning_tree: SpanningTreeReport,
    #[serde(skip)]
    text: Vec<String>,
}

impl RunReport {
    /// Shortest path lines, a blank line, then spanning edge lines
    pub fn text_lines(&self) -> &[String] {
        &self.text
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.text {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn widen<W: Weight>(value: W) -> u64 {
    value.to_u64().unwrap_or(u64::MAX)
}

/// Collects the path and distance of every discovered vertex, by id
pub fn shortest_path_entries<W: Weight>(graph: &UndirectedGraph<W>) -> Result<Vec<PathEntry>> {
    graph
        .discovered_vertices()
        .map(|vertex| {
            Ok(PathEntry {
                vertex: vertex.id,
                path: graph.path_to(vertex.id)?,
                distance: vertex.reached_distance().map(widen),
            })
        })
        .collect()
}

/// Formats one line per discovered vertex: its predecessor chain, then its distance.
///
/// The source has no predecessor and is printed twice (`"1 1 0"`); an unreached vertex
/// prints its id followed by the sentinel distance.
pub fn shortest_path_lines<W: Weight>(graph: &UndirectedGraph<W>) -> Result<Vec<String>> {
    graph
        .discovered_vertices()
        .map(|vertex| {
            let chain = graph.describe_path(vertex.id)?;
            if vertex.id == graph.source() {
                Ok(format!("{} {} {}", vertex.id, chain, vertex.distance))
            } else {
                Ok(format!("{} {}", chain, vertex.distance))
            }
        })
        .collect()
}

/// Formats spanning edges as `"a b"` lines
pub fn spanning_tree_lines(edges: &[(usize, usize)]) -> Vec<String> {
    edges.iter().map(|(a, b)| format!("{} {}", a, b)).collect()
}

/// Runs shortest paths, resets the shared state, runs the chosen spanning tree and
/// collects both results
pub fn run_pipeline<W: Weight>(
    graph: &mut UndirectedGraph<W>,
    strategy: SpanningStrategy,
) -> Result<RunReport> {
    let paths = graph.run_shortest_paths()?;
    let shortest_paths = shortest_path_entries(graph)?;
    let mut text = shortest_path_lines(graph)?;

    graph.reset_state();
    let tree = strategy.run(graph)?;
    let edges = graph.take_spanning_edges();

    text.push(String::new());
    text.extend(spanning_tree_lines(&edges));

    debug!(
        "pipeline: {} reachable vertices, {} spanning edges via {} (total {})",
        paths.reachable_count(),
        edges.len(),
        strategy,
        tree.total_weight
    );

    Ok(RunReport {
        vertex_count: graph.vertex_count(),
        source: graph.source(),
        shortest_paths,
        spanning_tree: SpanningTreeReport {
            strategy,
            edges,
            total_weight: widen(tree.total_weight),
        },
        text,
    })
}
