//! Rhythm Analyzer - tempo, beat and onset extraction for audio files
//!
//! This library analyzes an audio file and produces a JSON report with the
//! estimated tempo, beat timings and onset ("intense moment") timestamps.
//! Decoding and rhythm analysis are delegated to symphonia and aubio; the
//! library owns the orchestration around them.

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;

pub use config::AnalysisConfig;
pub use error::RhythmError;
pub use model::RhythmReport;
pub use pipeline::AnalysisPipeline;
