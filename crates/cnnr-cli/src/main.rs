mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cnnr_pipeline::{argmax, demo, Pipeline};
use cnnr_tensor::CpuBackend;

#[derive(Parser, Debug)]
#[command(name = "cnnr", version, about = "Classify a built-in sample digit with the bundled CNN")]
struct Cli {
    /// Index of the built-in sample digit to classify
    #[arg(default_value_t = 0)]
    sample: usize,

    /// Log filter (overrides RUST_LOG)
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log.clone())),
        )
        .init();

    // Out-of-range indexes fall back to the first sample.
    let index = if cli.sample < demo::TOTAL_SAMPLES {
        cli.sample
    } else {
        tracing::warn!(
            requested = cli.sample,
            available = demo::TOTAL_SAMPLES,
            "sample index out of range, using 0"
        );
        0
    };
    let (pixels, label) = demo::sample(index).expect("built-in sample");

    print!("{}", render::ascii_digit(pixels));

    let graph = demo::graph();
    let backend = CpuBackend::new();
    let input = demo::input_tensor(pixels);

    let probs = Pipeline::mnist().run(&graph, &backend, &input)?;

    println!("\nPredictions:");
    for (class, p) in probs.data().iter().enumerate() {
        println!("  {class}: {p:.6}");
    }

    let predicted = argmax(probs.data()).expect("non-empty probability vector");
    println!("\nThe number is {predicted} (labeled {label})");

    Ok(())
}
