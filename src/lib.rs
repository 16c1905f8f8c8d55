use std::path::PathBuf;

use crate::convert::{encode_webp, load, resize};
use crate::fs::{prepare_dest_dir, remove_legacy, write_output};

pub mod batches;
pub mod convert;
pub mod domain;
pub mod error;
pub mod fs;
pub mod logging;

pub use domain::{ConversionJob, Outcome, Summary};
pub use error::ConvertError;

/// Process `jobs` one at a time, in order. Nothing happens until the returned
/// iterator is polled; each item is the outcome of the corresponding job.
pub fn run(jobs: &[ConversionJob]) -> impl Iterator<Item = Outcome> + '_ {
    jobs.iter().map(process_job)
}

/// Convert a single job. Every failure is folded into the returned outcome.
pub fn process_job(job: &ConversionJob) -> Outcome {
    if !job.source_path.exists() {
        return Outcome::Skipped {
            name: job.name.clone(),
            reason: ConvertError::SourceMissing {
                path: job.source_path.clone(),
            }
            .to_string(),
        };
    }

    match convert_job(job) {
        Ok(output_path) => Outcome::Processed {
            name: job.name.clone(),
            output_path,
        },
        Err(error) => Outcome::Failed {
            name: job.name.clone(),
            error,
        },
    }
}

fn convert_job(job: &ConversionJob) -> Result<PathBuf, ConvertError> {
    prepare_dest_dir(&job.dest_dir)?;

    let resized = resize(&load(&job.source_path)?);
    let output_path = job.output_path();
    let bytes = encode_webp(&resized, &output_path)?;
    write_output(&output_path, &bytes)?;

    if job.cleanup_legacy {
        // The WebP is already on disk, so a stale PNG is not worth failing over.
        if let Err(e) = remove_legacy(job) {
            tracing::warn!("{} converted but legacy cleanup failed: {e}", job.name);
        }
    }
    Ok(output_path)
}

/// Drain `run`, logging one line per job and a closing tally.
pub fn run_logged(jobs: &[ConversionJob]) -> Summary {
    let mut summary = Summary::default();
    for outcome in run(jobs) {
        match &outcome {
            Outcome::Processed { name, output_path } => {
                tracing::info!("Processed {name} -> {}", output_path.display());
            }
            Outcome::Skipped { name, reason } => {
                tracing::warn!("Skipping {name}, {reason}");
            }
            Outcome::Failed { name, error } => {
                tracing::error!("Error processing {name}: {error}");
            }
        }
        summary.record(&outcome);
    }
    tracing::info!(
        "Batch finished: {} processed, {} skipped, {} failed",
        summary.processed,
        summary.skipped,
        summary.failed
    );
    summary
}
