use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use kp_optima::generator::InstanceKind;
use kp_optima::sweep::{SweepConfig, SweepRow};

/// Count globally optimal knapsack packings over a grid of random instances.
#[derive(Parser, Debug)]
#[command(name = "optima_sweep", version)]
struct Cli {
    /// Instance classes: uncorr, wcorr, scorr, ascorr, invscorr, ss, usw
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "uncorr,wcorr,scorr,ascorr,invscorr,ss"
    )]
    kinds: Vec<InstanceKind>,

    /// Item counts n
    #[arg(long, value_delimiter = ',', default_value = "50,100")]
    items: Vec<usize>,

    /// Upper bounds R for weight and profit sampling
    #[arg(long, value_delimiter = ',', default_value = "50,100,250")]
    ranges: Vec<u64>,

    /// Lower bound L for weight and profit sampling
    #[arg(long, default_value_t = 1)]
    lower: u64,

    /// Number of capacity steps H; step h uses h/(H+1) of the weight sum
    #[arg(long, default_value_t = 11)]
    steps: u64,

    /// Repetitions per grid point
    #[arg(long, default_value_t = 25)]
    runs: usize,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Write CSV rows here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    if cli.steps == 0 || cli.runs == 0 {
        bail!("--steps and --runs must be positive");
    }

    let config = SweepConfig {
        kinds: cli.kinds,
        items: cli.items,
        ranges: cli.ranges,
        lower: cli.lower,
        steps: cli.steps,
        runs: cli.runs,
        seed: cli.seed,
    };

    let start = Instant::now();
    let rows = config.run().context("sweep failed")?;
    tracing::info!(
        rows = rows.len(),
        wall_s = start.elapsed().as_secs_f64(),
        "sweep finished"
    );

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_rows(&mut out, &rows).context("cannot write results")?;
    Ok(())
}

fn write_rows(out: &mut dyn Write, rows: &[SweepRow]) -> io::Result<()> {
    writeln!(out, "{}", SweepRow::CSV_HEADER)?;
    for row in rows {
        writeln!(out, "{row}")?;
    }
    out.flush()
}
