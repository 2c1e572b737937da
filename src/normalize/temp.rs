//! Temporary WAV artifacts

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension given to every transcoded artifact
pub const ARTIFACT_EXTENSION: &str = "wav";

/// Random file name for a new artifact: 128 random bits as hex plus `.wav`
pub fn unique_artifact_name() -> String {
    format!("{:032x}.{}", rand::random::<u128>(), ARTIFACT_EXTENSION)
}

/// A transcoded file that is removed when dropped
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
    keep: bool,
}

impl TempArtifact {
    /// Reserve a fresh artifact path inside `dir`
    ///
    /// Nothing is created on disk; the transcoder writes the file.
    pub fn new_in(dir: &Path, keep: bool) -> Self {
        Self {
            path: dir.join(unique_artifact_name()),
            keep,
        }
    }

    /// Location of the artifact
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if self.keep {
            log::debug!("Keeping artifact {}", self.path.display());
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => log::debug!("Deleted artifact {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Artifact {} was never written", self.path.display())
            }
            Err(e) => log::warn!("Error deleting file {}: {}", self.path.display(), e),
        }
    }
}
