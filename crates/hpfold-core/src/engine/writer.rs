use super::error::PipelineError;
use crate::core::render::Artifact;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes every artifact into `dir`, overwriting files of the same name.
///
/// The directory is never created. If any write fails, the artifacts written by this call
/// are removed again so a failed run leaves no half-updated set of charts behind.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, PipelineError> {
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        debug!("Writing {} bytes to {:?}", artifact.bytes.len(), &path);
        if let Err(source) = fs::write(&path, &artifact.bytes) {
            written.push(path.clone());
            discard(&written);
            return Err(PipelineError::Write { path, source });
        }
        written.push(path);
    }
    Ok(written)
}

fn discard(paths: &[PathBuf]) {
    for path in paths {
        if path.is_file() {
            if let Err(e) = fs::remove_file(path) {
                warn!("Could not remove incomplete artifact {:?}: {}", path, e);
            }
        }
    }
}
