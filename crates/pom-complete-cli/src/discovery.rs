//! Target discovery

use std::path::{Path, PathBuf};

use pom_completer::Error;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::RunConfig;

/// Files a run should complete, in processing order.
///
/// With a version, that version's `<artifact>-<version>.pom` only; otherwise
/// every file below the working directory with the configured extension,
/// sorted by path.
pub fn discover_targets(config: &RunConfig) -> anyhow::Result<Vec<PathBuf>> {
    let dir = config.working_dir();
    if !dir.is_dir() {
        return Err(Error::NotFound(dir).into());
    }

    let targets = match &config.version {
        Some(version) => {
            let target = dir
                .join(version)
                .join(format!("{}-{}.pom", config.artifact_id, version));
            if !target.is_file() {
                return Err(Error::NotFound(target).into());
            }
            vec![target]
        }
        None => walk_extension(&dir, &config.extension)?,
    };

    debug!(dir = %dir.display(), count = targets.len(), "discovered targets");
    Ok(targets)
}

fn walk_extension(dir: &Path, extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut targets = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let matches = entry.file_type().is_file()
            && entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension);
        if matches {
            targets.push(entry.into_path());
        }
    }
    Ok(targets)
}
