//! # scorebench
//!
//! Command-line interface for anomaly scoring and forecasting benchmarks.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bench_facade::{run_benchmark, BenchmarkConfig, FailurePolicy, Metric};
use clap::{Parser, Subcommand};
use scorer_facade::{
    build_scorer, score_from_prediction, trailing_window_mean, AnomalyScorer, NormConfig,
    ScorerConfig,
};
use series_core::{read_csv, write_csv, CsvOptions, TimeSeries};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scorebench")]
#[command(about = "Anomaly scoring and forecasting benchmark CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an observed series against a prediction
    Score {
        /// Observed series (CSV)
        #[arg(short, long)]
        actual: PathBuf,

        /// Predicted series (CSV) aligned with the observed one
        #[arg(short, long)]
        predicted: PathBuf,

        /// Scorer (difference, norm)
        #[arg(short, long, default_value = "difference")]
        scorer: String,

        /// Order of the norm scorer
        #[arg(long)]
        ord: Option<f64>,

        /// Score each component on its own with the norm scorer
        #[arg(long)]
        component_wise: bool,

        /// Timestamp column shared by both files
        #[arg(short, long)]
        time_column: Option<String>,

        /// Average scores over a trailing window of this many steps
        #[arg(short, long)]
        window: Option<usize>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a forecasting benchmark described by a TOML file
    Bench {
        /// Benchmark config file
        #[arg(short, long, env = "SCOREBENCH_CONFIG")]
        config: PathBuf,

        /// Override the configured metric (mae, rmse, mape)
        #[arg(short, long)]
        metric: Option<String>,

        /// Continue past failing dataset/model pairs
        #[arg(long)]
        skip_failures: bool,

        /// Write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

/// Scorer configuration from the command-line options.
fn scorer_config(name: &str, ord: Option<f64>, component_wise: bool) -> Result<ScorerConfig> {
    let config: ScorerConfig = name.parse()?;
    Ok(match config {
        ScorerConfig::Norm(defaults) => ScorerConfig::Norm(NormConfig::new(
            ord.unwrap_or(defaults.ord),
            component_wise,
        )),
        other => {
            if ord.is_some() || component_wise {
                bail!("--ord and --component-wise only apply to the norm scorer");
            }
            other
        }
    })
}

fn load_series(path: &Path, options: &CsvOptions) -> Result<TimeSeries> {
    read_csv(path, options).with_context(|| format!("failed to read {}", path.display()))
}

#[allow(clippy::too_many_arguments)]
fn run_score(
    actual: &Path,
    predicted: &Path,
    scorer: &str,
    ord: Option<f64>,
    component_wise: bool,
    time_column: Option<String>,
    window: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let config = scorer_config(scorer, ord, component_wise)?;
    let scorer = build_scorer(&config).context("failed to build scorer")?;

    let mut options = CsvOptions::new();
    if let Some(column) = &time_column {
        options = options.time_column(column.clone());
    }
    let actual = load_series(actual, &options)?;
    let predicted = load_series(predicted, &options)?;

    let mut scores = score_from_prediction(scorer.as_ref(), &actual, &predicted)
        .with_context(|| format!("{} scoring failed", scorer.name()))?;
    if let Some(window) = window {
        scores = trailing_window_mean(&scores, window).context("window aggregation failed")?;
    }
    info!(
        scorer = scorer.name(),
        steps = scores.len(),
        components = scores.n_components(),
        "scored series"
    );

    let time_header = time_column.as_deref().unwrap_or("time");
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_csv(&scores, BufWriter::new(file), time_header)?;
            println!("Scores written to {}", path.display());
        }
        None => write_csv(&scores, io::stdout().lock(), time_header)?,
    }
    Ok(())
}

fn run_bench<W: Write>(
    config_path: &Path,
    metric: Option<&str>,
    skip_failures: bool,
    json: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let mut config = BenchmarkConfig::load(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if let Some(metric) = metric {
        config.metric = metric.parse::<Metric>()?;
    }
    if skip_failures {
        config.failure_policy = FailurePolicy::Skip;
    }

    let report = run_benchmark(&config).context("benchmark setup failed")?;

    for record in &report.records {
        writeln!(out, "{}", record.as_row())?;
    }
    for failure in &report.failures {
        writeln!(
            out,
            "{:20} {:28} FAILED: {}",
            failure.dataset, failure.model, failure.error
        )?;
    }
    writeln!(out, "{}", report)?;

    if let Some(path) = json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .context("failed to write JSON report")?;
        info!(path = %path.display(), "report written");
    }

    if report.aborted {
        bail!(
            "benchmark aborted after {} result(s)",
            report.records.len()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            actual,
            predicted,
            scorer,
            ord,
            component_wise,
            time_column,
            window,
            output,
        } => run_score(
            &actual,
            &predicted,
            &scorer,
            ord,
            component_wise,
            time_column,
            window,
            output.as_deref(),
        ),
        Commands::Bench {
            config,
            metric,
            skip_failures,
            json,
        } => run_bench(
            &config,
            metric.as_deref(),
            skip_failures,
            json.as_deref(),
            &mut io::stdout().lock(),
        ),
    }
}
