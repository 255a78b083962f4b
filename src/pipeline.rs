//! Main analysis pipeline orchestration
//!
//! One linear pass: validate the input path, decode, run the three rhythm
//! analysis steps, format the report, write it. Every failure aborts the
//! run; nothing is retried.

use crate::analysis::AudioAnalyzer;
use crate::config::AnalysisConfig;
use crate::error::RhythmError;
use crate::model::RhythmReport;
use crate::output::write_report;

/// Main analysis pipeline
pub struct AnalysisPipeline<A: AudioAnalyzer> {
    config: AnalysisConfig,
    analyzer: A,
}

impl<A: AudioAnalyzer> AnalysisPipeline<A> {
    /// Create a new analysis pipeline
    pub fn new(config: AnalysisConfig, analyzer: A) -> Self {
        Self { config, analyzer }
    }

    /// Run the complete analysis and write the JSON report.
    ///
    /// Returns the report that was written.
    pub fn run(&self) -> Result<RhythmReport, RhythmError> {
        let audio_path = &self.config.audio_path;

        // Reject a missing input before any decoding work starts
        if !audio_path.is_file() {
            return Err(RhythmError::MissingFile(audio_path.clone()));
        }

        log::info!("Loading {:?} for analysis...", audio_path);
        let audio = self
            .analyzer
            .decode(audio_path)
            .map_err(|e| RhythmError::Decode(format!("{e:#}")))?;

        log::info!("Analyzing rhythm and extracting beat timings...");
        let tempo = self
            .analyzer
            .tempo_and_beats(&audio)
            .map_err(|e| RhythmError::Analysis(format!("{e:#}")))?;
        let beat_times = self
            .analyzer
            .frames_to_time(&tempo.beat_frames, audio.sample_rate);

        log::info!("Calculating the onset strength of the signal...");
        let envelope = self
            .analyzer
            .onset_strength(&audio)
            .map_err(|e| RhythmError::Analysis(format!("{e:#}")))?;

        log::info!("Detecting intense moments...");
        let onset_frames = self
            .analyzer
            .detect_onsets(&envelope)
            .map_err(|e| RhythmError::Analysis(format!("{e:#}")))?;
        let intense_times = self
            .analyzer
            .frames_to_time(&onset_frames, audio.sample_rate);

        let report = RhythmReport::assemble(tempo.bpm, &beat_times, &intense_times);

        write_report(&report, &self.config.output_path)
            .map_err(|e| RhythmError::Write(format!("{e:#}")))?;

        Ok(report)
    }
}
