//! Mira command-line inspector
//!
//! Builds one of the bundled demo object graphs, runs the inspector over
//! it, and prints every class and object record the traversal emits.

mod fixtures;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mira")]
#[command(about = "Runtime object and class introspector", long_about = None)]
#[command(version)]
struct Cli {
    /// Demo graph to inspect
    #[arg(value_enum, default_value = "basic")]
    graph: fixtures::Graph,

    /// Expand compound fields transitively
    #[arg(short, long)]
    recursive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = fixtures::run(cli.graph, cli.recursive);
    print!("{}", render::render_report(&report));
    Ok(())
}
