use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConvertError;

/// Edge length of every converted asset, in pixels.
pub const TARGET_SIZE: u32 = 256;
/// Lossy WebP quality factor (0-100).
pub const WEBP_QUALITY: f32 = 85.0;
/// libwebp compression method; 6 is the slowest and smallest.
pub const WEBP_METHOD: i32 = 6;

pub const OUTPUT_EXTENSION: &str = "webp";
pub const LEGACY_EXTENSION: &str = "png";

/// One source image to be resized and re-encoded into `dest_dir`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub name: String,
    #[serde(rename = "src")]
    pub source_path: PathBuf,
    #[serde(rename = "dest")]
    pub dest_dir: PathBuf,
    /// Delete a same-named `.png` left over from the old uncompressed pipeline.
    #[serde(default)]
    pub cleanup_legacy: bool,
}

impl ConversionJob {
    pub fn new(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
            dest_dir: dest_dir.into(),
            cleanup_legacy: false,
        }
    }

    pub fn with_legacy_cleanup(mut self) -> Self {
        self.cleanup_legacy = true;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.dest_dir
            .join(format!("{}.{}", self.name, OUTPUT_EXTENSION))
    }

    pub fn legacy_path(&self) -> PathBuf {
        self.dest_dir
            .join(format!("{}.{}", self.name, LEGACY_EXTENSION))
    }
}

/// Result of processing a single job.
#[derive(Debug)]
pub enum Outcome {
    Processed { name: String, output_path: PathBuf },
    Skipped { name: String, reason: String },
    Failed { name: String, error: ConvertError },
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Processed { name, .. }
            | Outcome::Skipped { name, .. }
            | Outcome::Failed { name, .. } => name,
        }
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, Outcome::Processed { .. })
    }
}

/// Per-batch tally, reported once the batch is drained.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Processed { .. } => self.processed += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn output_and_legacy_paths_share_the_job_name() {
        let job = ConversionJob::new("cyber_pistol", "/in/a.png", "/out/loot");
        assert_eq!(job.output_path(), Path::new("/out/loot/cyber_pistol.webp"));
        assert_eq!(job.legacy_path(), Path::new("/out/loot/cyber_pistol.png"));
        assert!(!job.cleanup_legacy);
        assert!(job.with_legacy_cleanup().cleanup_legacy);
    }

    #[test]
    fn summary_counts_each_outcome_kind() {
        let mut summary = Summary::default();
        summary.record(&Outcome::Processed {
            name: "a".into(),
            output_path: "/out/a.webp".into(),
        });
        summary.record(&Outcome::Skipped {
            name: "b".into(),
            reason: "source not found".into(),
        });
        summary.record(&Outcome::Failed {
            name: "c".into(),
            error: ConvertError::CreateDir {
                path: "/out/c".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
        });
        assert_eq!(
            summary,
            Summary {
                processed: 1,
                skipped: 1,
                failed: 1
            }
        );
    }
}
