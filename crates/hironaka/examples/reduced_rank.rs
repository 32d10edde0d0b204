//! Resolving the Reduced Rank Regression Model
//!
//! Builds `f = a_1*b_1 + ... + a_H*b_H`, resolves it with automatic centers
//! and prints every chart together with the learning coefficient.
//!
//! Run with: cargo run --example reduced_rank -- [H] [--json]
//! Set RUST_LOG=debug to trace every chart and center.

use clap::Parser;
use hironaka::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Resolve the reduced rank regression model a_1*b_1 + ... + a_H*b_H")]
struct Cli {
    /// Number of hidden units H
    #[arg(default_value_t = 2)]
    hidden: usize,

    /// Print the chart reports as JSON instead of a tree
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut tree = ResolutionTree::reduced_rank(cli.hidden, ResolveConfig::default())?;
    let steps = tree.resolve()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tree.report())?);
        return Ok(());
    }

    let names = tree.names().to_vec();
    println!("f = {}", tree.polynomial().format_with(&names));
    println!("{steps} blow-ups, {} charts\n", tree.num_charts());

    for chart in tree.charts() {
        let indent = "  ".repeat(chart.label().depth());
        let label = if chart.label().is_root() {
            "root".to_string()
        } else {
            chart.label().to_string()
        };
        println!("{indent}[{label}] {}", chart.factorization().format_with(chart.variables()));
        if let Some(center) = chart.center() {
            println!("{indent}  center {center}");
        }
        if let (Some(min), Some(mult)) = (chart.rlct_min(), chart.multiplicity()) {
            println!(
                "{indent}  det J = {}, rlct = {min} (multiplicity {mult})",
                chart.format(chart.jacobian_determinant())
            );
        }
    }

    match tree.learning_coefficient() {
        Some(lc) => println!("\nlearning coefficient {} with multiplicity {}", lc.value, lc.multiplicity),
        None => println!("\nno exceptional divisor carries a threshold"),
    }
    Ok(())
}
