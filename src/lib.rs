// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Stem sampler.
//!
//! Picks a reproducible random subset of one voice's stem MIDI files from
//! a CocoChorales split and copies them, renamed by track ID, into a flat
//! directory for inference.

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod extract;
pub mod sampling;

pub use config::ExtractConfig;
pub use dataset::{scan_candidates, Candidate};
pub use error::ExtractError;
pub use export::CopiedStem;
pub use extract::{plan, run, ExtractReport};
