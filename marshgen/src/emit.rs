//! Writing rendered artifacts to disk.

use std::path::{Path, PathBuf};

use marshgen_codegen::{Artifact, GenerationReport, GeneratorConfig, render_java};
use thiserror::Error;

/// Error raised while writing generated sources.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A directory or file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Output path of an artifact: `<out_dir>/<package path>/<Name>.java`.
#[must_use]
pub fn artifact_path(out_dir: &Path, artifact: &Artifact) -> PathBuf {
    let mut path = out_dir.to_path_buf();
    for segment in artifact.package().split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{}.java", artifact.name()));
    path
}

/// Renders and writes every artifact of `report`, returning the written paths
/// in artifact order. Failed types are skipped.
///
/// # Errors
/// Returns `EmitError::Write` on the first IO failure.
pub fn write_artifacts(
    report: &GenerationReport,
    out_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, EmitError> {
    let mut written = Vec::with_capacity(report.artifacts.len());

    for artifact in &report.artifacts {
        let path = artifact_path(out_dir, artifact);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EmitError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&path, render_java(artifact, config)).map_err(|source| {
            EmitError::Write {
                path: path.clone(),
                source,
            }
        })?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    tracing::info!(
        "Wrote {} sources to {}",
        written.len(),
        out_dir.display()
    );
    Ok(written)
}
