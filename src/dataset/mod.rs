// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Dataset layout and candidate discovery.
//!
//! A split directory holds one subdirectory per track, and each track
//! holds its per-voice stems:
//!
//! ```text
//! test/
//!   <track_id>/
//!     stems_midi/1_trumpet.mid
//!     stems_midi/2_horn.mid
//!     ...
//! ```

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ExtractError, Result};

/// A stem file confirmed to exist under a track directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Name of the track directory, byte for byte
    pub track_id: OsString,
    /// Full path to the stem file
    pub path: PathBuf,
}

impl Candidate {
    /// Create a candidate for the given track and stem path
    pub fn new(track_id: impl Into<OsString>, path: impl Into<PathBuf>) -> Self {
        Self {
            track_id: track_id.into(),
            path: path.into(),
        }
    }
}

/// Collect every track under `root` that contains `stem_path`.
///
/// Only immediate subdirectories are considered. Results come back in
/// directory iteration order, which is platform dependent.
pub fn scan_candidates(root: &Path, stem_path: &Path) -> Result<Vec<Candidate>> {
    let read_err = |source: io::Error| ExtractError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    let mut tracks = 0usize;

    for entry in fs::read_dir(root).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let track_dir = entry.path();
        if !track_dir.is_dir() {
            continue;
        }
        tracks += 1;

        let stem = track_dir.join(stem_path);
        if stem.is_file() {
            candidates.push(Candidate::new(entry.file_name(), stem));
        } else {
            debug!("Skipping {:?}: no {:?}", track_dir, stem_path);
        }
    }

    info!(
        "Found {} candidates in {} tracks under {:?}",
        candidates.len(),
        tracks,
        root
    );
    Ok(candidates)
}
