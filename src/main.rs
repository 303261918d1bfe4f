use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scistat::{AnalysisConfig, DataAnalyzer, NormalizeMethod, OutlierMethod};

#[derive(Parser)]
#[command(
    name = "scistat",
    about = "Elementary statistics for exploratory scientific data analysis",
    version,
    long_about = None
)]
struct Cli {
    /// TOML config file with analysis defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print mean, median, std, min, max, and quartiles
    Summary {
        /// Dataset file, or - for stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Dataset name shown in the report
        #[arg(long)]
        name: Option<String>,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// Print the mean and population standard deviation
    MeanStd {
        #[arg(long, default_value = "-")]
        input: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Rescale a dataset (zscore or minmax)
    Normalize {
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Normalization method: zscore or minmax
        #[arg(long)]
        method: Option<NormalizeMethod>,

        #[arg(long)]
        json: bool,
    },

    /// List outliers (iqr or zscore)
    Outliers {
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Detection method: iqr or zscore
        #[arg(long)]
        method: Option<OutlierMethod>,

        /// Fence multiplier (iqr) or z-score cutoff (zscore)
        #[arg(long)]
        threshold: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Fit y = slope * x + intercept by least squares
    Regress {
        /// Independent variable
        #[arg(long)]
        x: PathBuf,

        /// Dependent variable
        #[arg(long)]
        y: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // An explicit --config must load; only the env fallback is lenient.
    let config = match cli.config.as_deref() {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::load_or_default(),
    };

    match cli.command {
        Commands::Summary { input, name, json } => {
            let data = scistat::input::read_dataset(&input)?;
            let name = name.unwrap_or_else(|| config.dataset.name.clone());
            tracing::info!(%name, n = data.len(), "Summarizing dataset");
            let analyzer = DataAnalyzer::with_name(data, name)?;
            let summary = analyzer.get_summary()?;

            if json {
                let report = serde_json::json!({
                    "name": analyzer.name(),
                    "n_samples": analyzer.n_samples(),
                    "summary": summary,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} ({} samples)", analyzer.name(), analyzer.n_samples());
                println!("{:<10} | Value", "Statistic");
                println!("{:-<10}-|-{:-<20}", "", "");
                for (key, value) in summary.iter() {
                    println!("{:<10} | {}", key, value);
                }
            }
        }
        Commands::MeanStd { input, json } => {
            let data = scistat::input::read_dataset(&input)?;
            let (mean, std) = scistat::calculate_mean_std(&data)?;
            if json {
                let report = serde_json::json!({ "mean": mean, "std": std });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Mean: {}", mean);
                println!("Std:  {}", std);
            }
        }
        Commands::Normalize {
            input,
            method,
            json,
        } => {
            let data = scistat::input::read_dataset(&input)?;
            let method = method.unwrap_or(config.normalize.method);
            tracing::info!(%method, n = data.len(), "Normalizing dataset");
            let normalized = scistat::normalize_data(&data, method)?;
            if json {
                println!("{}", serde_json::to_string(&normalized)?);
            } else {
                for value in normalized {
                    println!("{}", value);
                }
            }
        }
        Commands::Outliers {
            input,
            method,
            threshold,
            json,
        } => {
            let data = scistat::input::read_dataset(&input)?;
            let method = method.unwrap_or(config.outliers.method);
            let threshold = threshold.unwrap_or(config.outliers.threshold);
            tracing::info!(%method, %threshold, "Detecting outliers");

            let analyzer = DataAnalyzer::with_name(data, config.dataset.name.clone())?;
            let mask = analyzer.detect_outliers(method, threshold)?;
            let flagged: Vec<(usize, f64)> = analyzer
                .data()
                .iter()
                .zip(&mask)
                .enumerate()
                .filter_map(|(i, (&value, &is_outlier))| is_outlier.then_some((i, value)))
                .collect();

            if json {
                let report = serde_json::json!({
                    "method": method,
                    "threshold": threshold,
                    "mask": mask,
                    "outliers": flagged
                        .iter()
                        .map(|(index, value)| serde_json::json!({ "index": index, "value": value }))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if flagged.is_empty() {
                println!("No outliers found ({} samples).", analyzer.n_samples());
            } else {
                println!("{:<8} | Value", "Index");
                println!("{:-<8}-|-{:-<20}", "", "");
                for (index, value) in flagged {
                    println!("{:<8} | {}", index, value);
                }
            }
        }
        Commands::Regress { x, y, json } => {
            let xs = scistat::input::read_dataset(&x)?;
            let ys = scistat::input::read_dataset(&y)?;
            let fit = scistat::linear_regression(&xs, &ys)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&fit)?);
            } else {
                println!("y = {:.4}x + {:.4}", fit.slope, fit.intercept);
                println!("R² = {:.4}", fit.r_squared);
            }
        }
    }

    Ok(())
}
