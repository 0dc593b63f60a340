//! Command-line front end: train a perceptron on a dataset, then classify.
//!
//! Run with:
//!   cargo run --bin perceptron -- --builtin nand --trace
//!   cargo run --bin perceptron -- --data samples.csv --config spec.json --classify 1,0,1
//!
//! Logs go to stderr (filter with `RUST_LOG`); the training table and results
//! go to stdout.

mod table;

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferrite_perceptron::data::{self, builtin};
use ferrite_perceptron::{Perceptron, PerceptronSpec, Sample};

use table::TableSink;

#[derive(Parser)]
#[command(name = "perceptron", version, about = "Train a perceptron with the delta rule and classify inputs")]
struct Cli {
    /// JSON file describing the network and how to train it
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// CSV dataset: feature columns followed by the expected output
    #[arg(short, long, value_name = "PATH", conflicts_with = "builtin")]
    data: Option<PathBuf>,
    /// Built-in truth table (nand, and, or, xor); used when no CSV is given
    #[arg(short, long, value_name = "NAME")]
    builtin: Option<String>,
    /// Print the training table
    #[arg(long)]
    trace: bool,
    /// Seed for random weight initialization
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Give up after this many sample applications
    #[arg(long, value_name = "INT")]
    max_iterations: Option<usize>,
    /// Raw input to classify, bias included (e.g. 1,0,1). Repeatable
    #[arg(long, value_name = "LIST")]
    classify: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_spec(cli: &Cli) -> Result<PerceptronSpec, Box<dyn Error>> {
    let mut spec = match &cli.config {
        Some(path) => PerceptronSpec::load_json(&path.to_string_lossy())?,
        None => PerceptronSpec::default(),
    };
    if cli.trace {
        spec.trace = true;
    }
    if cli.seed.is_some() {
        spec.seed = cli.seed;
    }
    if cli.max_iterations.is_some() {
        spec.max_iterations = cli.max_iterations;
    }
    Ok(spec)
}

fn load_dataset(cli: &Cli) -> Result<Vec<Sample>, Box<dyn Error>> {
    if let Some(path) = &cli.data {
        return Ok(data::load_samples(path)?);
    }
    let name = cli.builtin.as_deref().unwrap_or("nand");
    builtin::by_name(name).ok_or_else(|| {
        let message = format!("unknown built-in dataset '{}' (expected one of: {})", name, builtin::NAMES.join(", "));
        Box::<dyn Error>::from(message)
    })
}

fn parse_input(list: &str) -> Result<Vec<u32>, Box<dyn Error>> {
    list.split(',')
        .map(|cell| {
            cell.trim()
                .parse::<u32>()
                .map_err(|_| Box::<dyn Error>::from(format!("'{}' in '{}' is not an unsigned integer", cell, list)))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    let spec = load_spec(&cli)?;
    let samples = load_dataset(&cli)?;
    let inputs = cli
        .classify
        .iter()
        .map(|list| parse_input(list.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut network = Perceptron::from_spec(&spec).with_sink(TableSink::new());
    let report = network.train_with(&samples, &spec.train_config())?;
    info!(?report, "trained");

    println!();
    println!(
        "Converged after {} iterations ({} with corrections).",
        report.iterations, report.corrections
    );

    println!("Training samples:");
    for sample in &samples {
        let mut input = Vec::with_capacity(sample.feature_count() + 1);
        input.push(network.bias());
        input.extend_from_slice(sample.inputs());
        let output = network.process(&input)?;
        let mark = if output == sample.expected() { "ok" } else { "MISS" };
        println!("  {:?} -> {} (expected {}) {}", input, output, sample.expected(), mark);
    }

    if !inputs.is_empty() {
        println!("Classified:");
        for input in &inputs {
            println!("  {:?} -> {}", input, network.process(input)?);
        }
    }

    Ok(())
}
