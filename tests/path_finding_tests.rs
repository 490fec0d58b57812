use rand::rngs::StdRng;
use rand::SeedableRng;
use span_paths::algorithm::dijkstra::Dijkstra;
use span_paths::algorithm::traits::ShortestPathAlgorithm;
use span_paths::graph::generators::random_connected_edge_list;
use span_paths::graph::{Graph, UndirectedGraph};
use span_paths::input::EdgeList;
use span_paths::Error;

const SCENARIO: [(usize, usize, u32); 12] = [
    (1, 2, 2),
    (1, 4, 1),
    (2, 5, 10),
    (2, 4, 3),
    (5, 7, 6),
    (3, 1, 4),
    (3, 6, 5),
    (4, 3, 2),
    (7, 6, 1),
    (4, 5, 2),
    (4, 7, 4),
    (4, 6, 8),
];

fn scenario_graph() -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new(7, 1).unwrap();
    for &(from, to, weight) in &SCENARIO {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

// Floyd-Warshall over the raw edge list
fn all_pairs(list: &EdgeList) -> Vec<Vec<Option<u64>>> {
    let n = list.vertex_count;
    let mut dist = vec![vec![None; n + 1]; n + 1];
    for v in 1..=n {
        dist[v][v] = Some(0);
    }
    for &(a, b, w) in &list.edges {
        for (x, y) in [(a, b), (b, a)] {
            if dist[x][y].map_or(true, |d| w < d) {
                dist[x][y] = Some(w);
            }
        }
    }
    for k in 1..=n {
        for i in 1..=n {
            for j in 1..=n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

#[test]
fn test_scenario_distances() {
    let mut graph = scenario_graph();
    let result = graph.run_shortest_paths().unwrap();

    let expected: [Option<u32>; 8] = [None, Some(0), Some(2), Some(3), Some(1), Some(3), Some(6), Some(5)];
    assert_eq!(result.distances, expected.to_vec());
    assert_eq!(graph.distance(4).unwrap(), Some(1));
    assert_eq!(graph.distance(5).unwrap(), Some(3));
    assert_eq!(result.reachable_count(), 7);
}

#[test]
fn test_scenario_predecessor_chains() {
    let mut graph = scenario_graph();
    let result = graph.run_shortest_paths().unwrap();

    assert_eq!(graph.path_to(5).unwrap(), vec![1, 4, 5]);
    assert_eq!(graph.path_to(6).unwrap(), vec![1, 4, 7, 6]);
    assert_eq!(graph.path_to(1).unwrap(), vec![1]);
    assert_eq!(graph.describe_path(3).unwrap(), "1 4 3");
    assert_eq!(graph.predecessor(2).unwrap(), Some(1));

    let dijkstra = Dijkstra::new();
    let path = <Dijkstra as ShortestPathAlgorithm<u32>>::get_path(&dijkstra, &result, 6).unwrap();
    assert_eq!(path, vec![1, 4, 7, 6]);
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
    }
}

#[test]
fn test_unreachable_vertices_keep_sentinel() {
    let mut graph: UndirectedGraph<u32> = UndirectedGraph::new(5, 1).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    graph.add_edge(4, 5, 1).unwrap();

    let result = graph.run_shortest_paths().unwrap();
    assert_eq!(result.distances, vec![None, Some(0u32), Some(3), None, None, None]);
    assert_eq!(graph.vertex(4).unwrap().distance, u32::MAX);
    assert_eq!(graph.predecessor(5).unwrap(), None);
    assert_eq!(graph.path_to(4).unwrap(), vec![4]);

    let dijkstra = Dijkstra::new();
    assert!(<Dijkstra as ShortestPathAlgorithm<u32>>::get_path(&dijkstra, &result, 5).is_none());
}

#[test]
fn test_distances_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(2024);
    for round in 0..20 {
        let list = random_connected_edge_list(12, 20, 30, &mut rng);
        let mut graph = list.build::<u64>().unwrap();
        let result = graph.run_shortest_paths().unwrap();
        let expected = all_pairs(&list);

        for v in 1..=list.vertex_count {
            assert_eq!(
                result.distances[v], expected[list.source][v],
                "round {}: distance to {} from {}", round, v, list.source
            );

            // Summing the lightest edge along the chain gives back the distance
            let path = graph.path_to(v).unwrap();
            assert_eq!(path[0], list.source);
            let cost: u64 = path
                .windows(2)
                .map(|pair| graph.get_edge_weight(pair[0], pair[1]).unwrap())
                .sum();
            assert_eq!(Some(cost), result.distances[v]);
        }
    }
}

#[test]
fn test_rerun_after_reset_is_identical() {
    let mut graph = scenario_graph();
    let first = graph.run_shortest_paths().unwrap();
    graph.reset_state();
    let second = graph.run_shortest_paths().unwrap();
    assert_eq!(first.distances, second.distances);
    assert_eq!(first.predecessors, second.predecessors);
}

#[test]
fn test_distance_past_weight_type_is_an_error() {
    let mut graph: UndirectedGraph<u32> = UndirectedGraph::new(3, 1).unwrap();
    graph.add_edge(1, 2, 3_000_000_000).unwrap();
    graph.add_edge(2, 3, 3_000_000_000).unwrap();
    assert!(matches!(graph.run_shortest_paths(), Err(Error::DistanceOverflow(3))));

    let list = EdgeList::parse_str("3 1\n1 2 3000000000\n2 3 3000000000\n0 0 0\n").unwrap();
    let mut wide = list.build::<u64>().unwrap();
    let result = wide.run_shortest_paths().unwrap();
    assert_eq!(result.distances[3], Some(6_000_000_000u64));
}

#[test]
fn test_overflowing_detour_is_ignored_when_a_shorter_path_exists() {
    let mut graph: UndirectedGraph<u8> = UndirectedGraph::new(4, 1).unwrap();
    graph.add_edge(1, 2, 10).unwrap();
    graph.add_edge(2, 3, 250).unwrap();
    graph.add_edge(1, 4, 100).unwrap();
    graph.add_edge(4, 3, 100).unwrap();

    // 10 + 250 does not fit, but 3 is reached through 4 instead
    let result = graph.run_shortest_paths().unwrap();
    assert_eq!(result.distances, vec![None, Some(0u8), Some(10), Some(200), Some(100)]);
    assert_eq!(graph.path_to(3).unwrap(), vec![1, 4, 3]);
}
