//! JSON job documents: one standard profile and the frames to cut from it.

use crate::error::{CutError, Result};
use crate::model::{FrameSpec, StandardProfileSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete optimization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Stock available for cutting.
    #[serde(default)]
    pub profile: StandardProfileSpec,
    /// Frames to cut.
    #[serde(default)]
    pub frames: Vec<FrameSpec>,
}

/// Parse a job from JSON text.
pub fn parse_job_str(content: &str) -> Result<Job> {
    serde_json::from_str(content).map_err(|e| CutError::InvalidJob {
        message: e.to_string(),
    })
}

/// Parse a job file.
pub fn parse_job_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(CutError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CutError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let job = parse_job_str(&content)?;
    tracing::debug!(
        "Loaded job with {} frame(s) from {}",
        job.frames.len(),
        path.display()
    );
    Ok(job)
}
