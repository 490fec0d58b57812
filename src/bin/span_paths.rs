use std::env;
use std::process;

use log::{error, info};
use span_paths::config::{OutputFormat, RunConfig};
use span_paths::input::EdgeList;
use span_paths::report::run_pipeline;

fn run() -> span_paths::Result<()> {
    let config = RunConfig::from_args(env::args().skip(1))?;
    info!("running with {:?}", config);

    let edge_list = EdgeList::parse(config.open_input()?)?;
    let mut graph = edge_list.build::<u32>()?;
    let report = run_pipeline(&mut graph, config.strategy)?;

    info!(
        "spanning tree via {}: {} edges, total weight {}",
        report.spanning_tree.strategy,
        report.spanning_tree.edges.len(),
        report.spanning_tree.total_weight
    );

    match config.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("span_paths: {}", err);
        process::exit(1);
    }
}
