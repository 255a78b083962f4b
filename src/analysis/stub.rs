//! Stub analyzer implementation
//!
//! Returns fixed, deterministic analysis data without touching the file
//! system or the aubio detectors. Used by pipeline tests to exercise
//! validation, formatting and output writing in isolation.

use super::traits::{AudioAnalyzer, DecodedAudio, OnsetEnvelope, TempoEstimate};
use anyhow::Result;
use std::path::Path;

/// Stub analyzer with a fixed 120 BPM click-track answer
pub struct StubAnalyzer;

impl StubAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioAnalyzer for StubAnalyzer {
    fn hop_size(&self) -> usize {
        512
    }

    fn decode(&self, audio_path: &Path) -> Result<DecodedAudio> {
        log::debug!("Stub decode for: {:?}", audio_path);

        Ok(DecodedAudio {
            samples: vec![0.0; 44100 * 2],
            sample_rate: 44100,
        })
    }

    fn tempo_and_beats(&self, _audio: &DecodedAudio) -> Result<TempoEstimate> {
        // Beats near 0.5s, 1.0s and 1.5s at hop 512 / 44100Hz
        Ok(TempoEstimate {
            bpm: 120.0,
            beat_frames: vec![43, 86, 129],
        })
    }

    fn onset_strength(&self, _audio: &DecodedAudio) -> Result<OnsetEnvelope> {
        Ok(OnsetEnvelope {
            strengths: vec![0.0, 0.8, 0.1, 0.0, 0.9, 0.2],
            onset_frames: vec![21, 107],
        })
    }

    fn detect_onsets(&self, envelope: &OnsetEnvelope) -> Result<Vec<u64>> {
        Ok(envelope.onset_frames.clone())
    }
}
