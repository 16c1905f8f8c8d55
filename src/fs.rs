use std::fs;
use std::path::Path;

use crate::domain::ConversionJob;
use crate::error::ConvertError;

/// Create `dest_dir` and any missing parents. Existing directories are left alone.
pub fn prepare_dest_dir(dest_dir: &Path) -> Result<(), ConvertError> {
    if dest_dir.is_dir() {
        return Ok(());
    }
    tracing::debug!("Creating destination directory: {}", dest_dir.display());
    fs::create_dir_all(dest_dir).map_err(|source| ConvertError::CreateDir {
        path: dest_dir.to_path_buf(),
        source,
    })
}

pub fn write_output(output_path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    fs::write(output_path, bytes).map_err(|source| ConvertError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}

/// Remove the job's stale `.png`, if any. Returns whether a file was deleted.
///
/// Callers must only invoke this once the WebP output has been written.
pub fn remove_legacy(job: &ConversionJob) -> Result<bool, ConvertError> {
    let legacy = job.legacy_path();
    if !legacy.is_file() {
        return Ok(false);
    }
    fs::remove_file(&legacy).map_err(|source| ConvertError::RemoveLegacy {
        path: legacy.clone(),
        source,
    })?;
    tracing::debug!("Removed legacy file: {}", legacy.display());
    Ok(true)
}
