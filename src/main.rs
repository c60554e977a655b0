//! Heapcount - Heap Sort Operation Count Analysis
//!
//! Main CLI entry point for running the experiment, sorting ad-hoc input,
//! and printing reference bounds.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use heapcount::config::CONFIG_FILE_NAME;
use heapcount::report;
use heapcount::{
    heap_sort_with, n_log_n, random_sequence_with, Experiment, HeapcountConfig, OpCounter,
    OutputFormat,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Sequences longer than this are summarized instead of printed
const MAX_PRINTED_VALUES: usize = 100;

#[derive(Parser)]
#[command(name = "heapcount")]
#[command(version)]
#[command(about = "Heap sort operation counts against the n log n bound", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Commands sorted alphabetically for easier navigation
    /// Print floor(log2(n) * n) for an array size
    Bound {
        /// Array size
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },

    /// Write a default heapcount.toml
    Init {
        /// Output path
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Run the operation count experiment
    Run {
        /// Config file (default: search for heapcount.toml upward from cwd)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Smallest size exponent (size = 10^e)
        #[arg(long)]
        min_exponent: Option<u32>,

        /// Largest size exponent (size = 10^e)
        #[arg(long)]
        max_exponent: Option<u32>,

        /// Trials per size
        #[arg(short, long)]
        trials: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Only print per-size summaries
        #[arg(long)]
        no_trials: bool,
    },

    /// Sort integers and report the operation count
    Sort {
        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,

        /// Sort this many random values instead
        #[arg(long, conflicts_with = "values")]
        random: Option<usize>,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Bound { n } => cmd_bound(n),
        Commands::Init { output, force } => cmd_init(&output, force),
        Commands::Run {
            config,
            min_exponent,
            max_exponent,
            trials,
            seed,
            format,
            no_trials,
        } => {
            let mut config = load_config(config.as_deref())?;
            let experiment = &mut config.experiment;
            if let Some(min) = min_exponent {
                experiment.min_exponent = min;
            }
            if let Some(max) = max_exponent {
                experiment.max_exponent = max;
            }
            if let Some(trials) = trials {
                experiment.trials = trials;
            }
            if seed.is_some() {
                experiment.seed = seed;
            }
            if let Some(format) = format {
                config.output.format = format.into();
            }
            if no_trials {
                config.output.show_trials = false;
            }
            cmd_run(&config)
        }
        Commands::Sort {
            values,
            random,
            seed,
        } => cmd_sort(values, random, seed),
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "heapcount=warn",
        1 => "heapcount=info",
        _ => "heapcount=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<HeapcountConfig> {
    match path {
        Some(path) => HeapcountConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => HeapcountConfig::load_from_cwd().context("Failed to load heapcount.toml"),
    }
}

fn cmd_bound(n: u64) -> Result<()> {
    println!("{}", n_log_n(n));
    Ok(())
}

fn cmd_init(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    HeapcountConfig::default()
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}

fn cmd_run(config: &HeapcountConfig) -> Result<()> {
    let experiment = Experiment::new(config.experiment.clone())?;
    let start = Instant::now();

    match config.output.format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let show_trials = config.output.show_trials;
            let mut write_err = None;

            // Stream each size as soon as it is measured
            experiment.run_with(|size| {
                let mut out = stdout.lock();
                match writeln!(out, "{}", report::render_size(size, show_trials)) {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(e) => {
                        write_err = Some(e);
                        ControlFlow::Break(())
                    }
                }
            });

            if let Some(e) = write_err {
                return Err(e).context("Failed to write report");
            }
        }
        OutputFormat::Json => {
            let result = experiment.run();
            let json = report::render_json(&result).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    tracing::info!(elapsed = ?start.elapsed(), "experiment finished");
    Ok(())
}

fn cmd_sort(values: Vec<i32>, random: Option<usize>, seed: Option<u64>) -> Result<()> {
    let mut seq = match random {
        Some(len) => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            random_sequence_with(&mut rng, len)
        }
        None => values,
    };

    let mut ops = OpCounter::new();
    heap_sort_with(&mut seq, &mut ops);

    if seq.len() <= MAX_PRINTED_VALUES {
        println!("Sorted: {:?}", seq);
    } else {
        println!("Sorted: {} values", seq.len());
    }
    println!("Operations: {}", ops.total());
    println!("  Build steps: {}", ops.build_steps);
    println!("  Promotions:  {}", ops.promotions);
    println!("  Swaps:       {}", ops.swaps);
    println!("  Extractions: {}", ops.extractions);
    println!("Expected --> O(n(lgn)): {}", n_log_n(seq.len() as u64));

    Ok(())
}
