// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stem_sampler::{extract, ExtractConfig};

#[derive(Parser, Debug)]
#[command(name = "stem-sampler")]
#[command(about = "Extract random soprano MIDI samples from a test split", long_about = None)]
struct Args {
    /// Path to test split directory
    #[arg(long)]
    test_dir: Option<PathBuf>,

    /// Where to copy sampled MIDI files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Number of random samples to extract [default: 100]
    #[arg(long)]
    num: Option<usize>,

    /// Random seed for reproducibility [default: 42]
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// YAML or TOML file with run settings (flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show what would be copied without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Resolve settings: defaults, then the config file, then flags
    fn into_config(self) -> Result<ExtractConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractConfig::load(path)
                .with_context(|| format!("Invalid config file: {}", path.display()))?,
            None => ExtractConfig::default(),
        };

        if let Some(test_dir) = self.test_dir {
            config.test_dir = test_dir;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(num) = self.num {
            config.num = num;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let dry_run = args.dry_run;
    let config = args.into_config()?;
    debug!("Resolved settings:\n{}", config.to_yaml()?);

    if dry_run {
        let report = extract::plan(&config)?;
        for stem in &report.stems {
            println!("{} -> {}", stem.source.display(), stem.destination.display());
        }
        println!(
            "Would copy {} {} MIDI files to {}",
            report.count(),
            config.suffix,
            report.output_dir.display()
        );
        return Ok(());
    }

    let report = extract::run(&config)
        .with_context(|| format!("Extraction from {} failed", config.test_dir.display()))?;
    info!("Wrote {} bytes", report.total_bytes());

    println!(
        "Copied {} {} MIDI files to {}",
        report.count(),
        config.suffix,
        report.output_dir.display()
    );

    Ok(())
}
