use std::path::PathBuf;

use span_paths::config::{OutputFormat, RunConfig};
use span_paths::{Error, SpanningStrategy};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let config = RunConfig::from_args(Vec::new()).unwrap();
    assert_eq!(config.input, None);
    assert_eq!(config.strategy, SpanningStrategy::Frontier);
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn test_all_options() {
    let config = RunConfig::from_args(args(&["--strategy", "kruskal", "--json", "graph.txt"])).unwrap();
    assert_eq!(config.input, Some(PathBuf::from("graph.txt")));
    assert_eq!(config.strategy, SpanningStrategy::UnionFind);
    assert_eq!(config.format, OutputFormat::Json);

    let config = RunConfig::from_args(args(&["--strategy=union-find", "-"])).unwrap();
    assert_eq!(config.strategy, SpanningStrategy::UnionFind);
    assert_eq!(config.input, None);
}

#[test]
fn test_bad_arguments() {
    assert!(matches!(RunConfig::from_args(args(&["--strategy"])), Err(Error::Config(_))));
    assert!(matches!(RunConfig::from_args(args(&["--strategy", "boruvka"])), Err(Error::Config(_))));
    assert!(matches!(RunConfig::from_args(args(&["--verbose"])), Err(Error::Config(_))));
    assert!(matches!(RunConfig::from_args(args(&["a.txt", "b.txt"])), Err(Error::Config(_))));
}

#[test]
fn test_builder_and_missing_file() {
    let config = RunConfig::default()
        .with_input("/nonexistent/graph.txt")
        .with_strategy(SpanningStrategy::UnionFind)
        .with_format(OutputFormat::Json);
    assert_eq!(config.strategy, SpanningStrategy::UnionFind);
    assert!(matches!(config.open_input(), Err(Error::Io(_))));
}
