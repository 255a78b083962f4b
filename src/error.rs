//! Pipeline error kinds
//!
//! Every failure aborts the run; the binary collapses whichever kind
//! occurred into a single `Error: <message>` line. The kinds are kept
//! distinct so tests and callers can tell which stage failed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RhythmError {
    /// The audio path does not name a regular file. Raised before any
    /// decoding is attempted.
    #[error("the specified audio file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    /// Probing or decoding the audio file failed.
    #[error("failed to decode audio: {0}")]
    Decode(String),

    /// Tempo, beat or onset estimation failed.
    #[error("rhythm analysis failed: {0}")]
    Analysis(String),

    /// Writing the JSON report failed.
    #[error("failed to write analysis output: {0}")]
    Write(String),
}
