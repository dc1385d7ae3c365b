//! Shared command-line front end for the lab binaries.
//!
//! With no flags a run uses the build-time constants from [`crate::config`]
//! and writes `results/` and `figures/` under the current directory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{BenchConfig, DEFAULT_REPEATS, DEFAULT_SEED};
use crate::error::Error;
use crate::registry::{build_registry, Lab};
use crate::utils::export::Exporter;
use crate::utils::runner::run_all_with;
use crate::utils::timer::PinStrategy;
use crate::utils::tui;

/// usvg warns once per text node when a font family is missing; the
/// rasterizer reports that once itself
const DEFAULT_LOG_FILTER: &str = "info,usvg=error";

/// Command-line overrides; every flag is optional
#[derive(Debug, Parser)]
#[command(version, about = "Time every algorithm of a lab and write CSV, LaTeX and PNG reports")]
pub struct Args {
    /// Trials per (algorithm, size); the fastest one is reported
    #[arg(long, default_value_t = DEFAULT_REPEATS)]
    pub repeats: usize,

    /// Comma-separated input sizes, replacing the lab's built-in list
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Seed for generated inputs
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory that receives results/ and figures/ [default: lab1 or lab2]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Pin the measuring thread to one core during each trial
    #[arg(long)]
    pub pin: bool,

    /// Skip the correctness check that runs before timing
    #[arg(long)]
    pub skip_verify: bool,

    /// List this lab's algorithms and exit
    #[arg(short, long)]
    pub list: bool,
}

impl Args {
    /// Fold the flags over the lab's defaults
    pub fn to_config(&self, lab: &dyn Lab) -> BenchConfig {
        let sizes = self.sizes.clone().unwrap_or_else(|| lab.default_sizes());
        let mut config = BenchConfig::with_sizes(sizes);
        config.timing.repeats = self.repeats;
        config.timing.pin_strategy = if self.pin {
            PinStrategy::PerTrial
        } else {
            PinStrategy::Off
        };
        config.seed = self.seed;
        config.output_root = self
            .out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(lab.default_out_dir()));
        config.verify = !self.skip_verify;
        config
    }
}

/// Install the stderr `fmt` subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Verify, measure and export one lab.
///
/// Outputs for an algorithm are written as soon as its last size is
/// measured; the comparison chart comes last.
pub fn run_lab(lab: &dyn Lab, config: &BenchConfig) -> anyhow::Result<()> {
    config.validate()?;

    tui::print_lab_info_box(lab, &config.sizes, config.timing.repeats);

    if config.verify {
        lab.verify()
            .with_context(|| format!("{} algorithms failed verification", lab.name()))?;
        tracing::info!(lab = lab.name(), "verification passed");
    }

    let exporter = Exporter::new(config, lab.chart_style())
        .with_context(|| format!("preparing output directories under {}", config.output_root.display()))?;

    let results = run_all_with(lab, config, |set| {
        tui::print_results_table(set);
        exporter.export(set)
    })?;

    exporter.export_comparison(results.as_slice())?;
    tracing::info!(lab = lab.name(), algorithms = results.len(), "done");
    Ok(())
}

/// Entry point shared by the `lab1` and `lab2` binaries
pub fn main_for(lab_name: &str) -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let registry = build_registry();
    let lab = registry
        .find(lab_name)
        .ok_or_else(|| Error::UnknownLab(lab_name.to_string()))?;

    if args.list {
        tui::print_lab_algorithms(lab);
        return Ok(());
    }

    tui::print_header();
    run_lab(lab, &args.to_config(lab))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::FibonacciLab;
    use crate::sorting::SortingLab;

    #[test]
    fn test_no_flags_uses_build_time_defaults() {
        let args = Args::try_parse_from(["lab1"]).unwrap();
        let config = args.to_config(&FibonacciLab);

        assert_eq!(config.sizes, FibonacciLab.default_sizes());
        assert_eq!(config.timing.repeats, 3);
        assert_eq!(config.seed, 42);
        assert_eq!(config.output_root, PathBuf::from("lab1"));
        assert_eq!(config.timing.pin_strategy, PinStrategy::Off);
        assert!(config.verify);
    }

    #[test]
    fn test_labs_default_to_separate_output_roots() {
        let args = Args::try_parse_from(["lab"]).unwrap();
        let fibonacci = args.to_config(&FibonacciLab);
        let sorting = args.to_config(&SortingLab);

        assert_ne!(fibonacci.output_root, sorting.output_root);
        assert_ne!(
            fibonacci.figures_dir().join("comparison.png"),
            sorting.figures_dir().join("comparison.png")
        );
    }

    #[test]
    fn test_log_filter_silences_font_warnings() {
        let filter: EnvFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        let shown = filter.to_string();
        assert!(shown.contains("usvg=error"));
        assert!(shown.contains("info"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "lab2",
            "--sizes",
            "10,20,30",
            "--repeats",
            "5",
            "--seed",
            "7",
            "--out-dir",
            "/tmp/report",
            "--pin",
            "--skip-verify",
        ])
        .unwrap();
        let config = args.to_config(&SortingLab);

        assert_eq!(config.sizes, vec![10, 20, 30]);
        assert_eq!(config.timing.repeats, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.output_root, PathBuf::from("/tmp/report"));
        assert_eq!(config.timing.pin_strategy, PinStrategy::PerTrial);
        assert!(!config.verify);
    }

    #[test]
    fn test_run_lab_writes_every_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BenchConfig::with_sizes(vec![100, 500]);
        config.timing.repeats = 1;
        config.output_root = dir.path().to_path_buf();

        run_lab(&SortingLab, &config).unwrap();

        for algo in SortingLab.algorithms() {
            let csv = std::fs::read_to_string(dir.path().join(format!("results/{}.csv", algo.key)))
                .unwrap();
            assert_eq!(csv.lines().count(), 3);
            assert!(csv.starts_with("n,time_s\n100,"));
            assert!(dir
                .path()
                .join(format!("results/{}_table.tex", algo.key))
                .is_file());
            assert!(dir.path().join(format!("figures/{}.png", algo.key)).is_file());
        }
        assert!(dir.path().join("figures/comparison.png").is_file());
    }

    #[test]
    fn test_run_lab_rejects_zero_repeats() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BenchConfig::with_sizes(vec![5]);
        config.timing.repeats = 0;
        config.output_root = dir.path().to_path_buf();

        assert!(run_lab(&FibonacciLab, &config).is_err());
        assert!(!dir.path().join("results").exists());
    }
}
