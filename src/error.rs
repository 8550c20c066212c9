// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for stem extraction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an extraction run
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No track under the source root has the requested stem
    #[error("No {stem} files found in {}", root.display())]
    NoCandidates { root: PathBuf, stem: String },

    /// More samples requested than there are candidates
    #[error("Requested {requested} samples, but only {available} available")]
    NotEnoughCandidates { requested: usize, available: usize },

    /// Source root could not be listed
    #[error("Failed to read source directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination directory could not be created
    #[error("Failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A sampled stem could not be copied
    #[error("Failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
