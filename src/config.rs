//! Analysis run configuration

use std::path::PathBuf;

/// Configuration for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Audio file to analyze
    pub audio_path: PathBuf,

    /// Destination for the JSON report (created or overwritten)
    pub output_path: PathBuf,
}

impl AnalysisConfig {
    pub fn new(audio_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            audio_path,
            output_path,
        }
    }
}
