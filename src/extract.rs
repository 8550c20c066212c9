// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! End-to-end extraction run.
//!
//! Scan the split, check the request against what was found, sample,
//! then copy. Both request checks happen before anything is written, so
//! a rejected run leaves the output directory untouched.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::ExtractConfig;
use crate::dataset::scan_candidates;
use crate::error::{ExtractError, Result};
use crate::export::{copy_stem, destination_for, ensure_output_dir, CopiedStem};
use crate::sampling::sample;

/// Outcome of an extraction run
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Candidates found under the source root
    pub available: usize,
    /// Sampled stems, in sampling order
    pub stems: Vec<CopiedStem>,
    /// Where the stems went
    pub output_dir: PathBuf,
    /// Nothing was written
    pub dry_run: bool,
}

impl ExtractReport {
    /// Number of stems sampled
    pub fn count(&self) -> usize {
        self.stems.len()
    }

    /// Total bytes written
    pub fn total_bytes(&self) -> u64 {
        self.stems.iter().map(|s| s.bytes).sum()
    }
}

/// Sample stems according to `config` and copy them to its output directory.
///
/// Copies stop at the first I/O failure; files already copied stay in place.
pub fn run(config: &ExtractConfig) -> Result<ExtractReport> {
    execute(config, false)
}

/// Sample exactly as [`run`] would, without creating or writing anything
pub fn plan(config: &ExtractConfig) -> Result<ExtractReport> {
    execute(config, true)
}

fn execute(config: &ExtractConfig, dry_run: bool) -> Result<ExtractReport> {
    let candidates = scan_candidates(&config.test_dir, &config.stem_path)?;
    let available = candidates.len();

    if available == 0 {
        return Err(ExtractError::NoCandidates {
            root: config.test_dir.clone(),
            stem: config.suffix.clone(),
        });
    }

    let sampled = sample(&candidates, config.num, config.seed as u64)?;
    info!(
        "Sampled {} of {} candidates (seed {})",
        sampled.len(),
        available,
        config.seed
    );

    let stems = if dry_run {
        sampled
            .iter()
            .map(|candidate| CopiedStem {
                track_id: candidate.track_id.clone(),
                source: candidate.path.clone(),
                destination: destination_for(candidate, &config.output_dir, &config.suffix),
                bytes: 0,
            })
            .collect()
    } else {
        ensure_output_dir(&config.output_dir)?;

        let mut stems = Vec::with_capacity(sampled.len());
        for candidate in &sampled {
            match copy_stem(candidate, &config.output_dir, &config.suffix) {
                Ok(copied) => stems.push(copied),
                Err(e) => {
                    warn!("Aborting after {} of {} copies", stems.len(), sampled.len());
                    return Err(e);
                }
            }
        }
        stems
    };

    Ok(ExtractReport {
        available,
        stems,
        output_dir: config.output_dir.clone(),
        dry_run,
    })
}
