// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Copying sampled stems into the flat output directory.
//!
//! Files are copied byte for byte; MIDI contents are never parsed.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dataset::Candidate;
use crate::error::{ExtractError, Result};

/// One stem placed (or planned) in the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedStem {
    /// Track the stem came from
    pub track_id: OsString,
    /// Source stem file
    pub source: PathBuf,
    /// Destination file
    pub destination: PathBuf,
    /// Bytes written (0 when not copied)
    pub bytes: u64,
}

/// Create the output directory and any missing parents
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ExtractError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Destination path for a candidate given the output naming suffix
pub fn destination_for(candidate: &Candidate, output_dir: &Path, suffix: &str) -> PathBuf {
    let mut name = candidate.track_id.clone();
    name.push(format!("_{}.mid", suffix));
    output_dir.join(name)
}

/// Copy one stem, replacing any existing file of the same name
pub fn copy_stem(candidate: &Candidate, output_dir: &Path, suffix: &str) -> Result<CopiedStem> {
    let destination = destination_for(candidate, output_dir, suffix);
    let bytes = fs::copy(&candidate.path, &destination).map_err(|source| ExtractError::Copy {
        from: candidate.path.clone(),
        to: destination.clone(),
        source,
    })?;

    debug!("Copied {:?} -> {:?} ({} bytes)", candidate.path, destination, bytes);

    Ok(CopiedStem {
        track_id: candidate.track_id.clone(),
        source: candidate.path.clone(),
        destination,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_stem(root: &Path, id: &str, data: &[u8]) -> Candidate {
        let stems = root.join(id).join("stems_midi");
        fs::create_dir_all(&stems).unwrap();
        let path = stems.join("1_trumpet.mid");
        fs::write(&path, data).unwrap();
        Candidate::new(id, path)
    }

    #[test]
    fn test_destination_name() {
        let candidate = Candidate::new("track7", "/data/track7/stems_midi/1_trumpet.mid");
        assert_eq!(
            destination_for(&candidate, Path::new("/out"), "soprano"),
            PathBuf::from("/out/track7_soprano.mid")
        );
    }

    #[test]
    fn test_copy_is_verbatim() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        let data = b"MThd\x00\x00\x00\x06\x00\x01\x00\x02\x01\xe0";
        let candidate = write_stem(src.path(), "trackA", data);

        let copied = copy_stem(&candidate, out.path(), "soprano").unwrap();

        assert_eq!(copied.destination, out.path().join("trackA_soprano.mid"));
        assert_eq!(copied.bytes, data.len() as u64);
        assert_eq!(fs::read(&copied.destination).unwrap(), data);
    }

    #[test]
    fn test_copy_overwrites() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        let candidate = write_stem(src.path(), "trackA", b"new contents");
        fs::write(out.path().join("trackA_soprano.mid"), b"stale stale stale").unwrap();

        copy_stem(&candidate, out.path(), "soprano").unwrap();

        assert_eq!(
            fs::read(out.path().join("trackA_soprano.mid")).unwrap(),
            b"new contents"
        );
    }

    #[test]
    fn test_copy_missing_source() {
        let out = tempdir().unwrap();
        let candidate = Candidate::new("ghost", out.path().join("ghost.mid"));

        let result = copy_stem(&candidate, out.path(), "soprano");
        assert!(matches!(result, Err(ExtractError::Copy { .. })));
    }

    #[test]
    fn test_ensure_output_dir_nested_and_existing() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("input_midi").join("1");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_blocked_by_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, b"").unwrap();

        let result = ensure_output_dir(&blocker.join("sub"));
        assert!(matches!(result, Err(ExtractError::CreateDir { .. })));
    }
}
