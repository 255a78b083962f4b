//! Analysis trait definitions and data structures

use anyhow::Result;
use std::path::Path;

/// Audio analysis capability - allows swapping between the aubio-backed
/// implementation and a deterministic stub for tests.
///
/// The five operations are consumed in a fixed order by the pipeline:
/// decode, tempo/beat estimation, onset-strength computation, onset
/// detection, frame-to-time conversion.
pub trait AudioAnalyzer {
    /// Analysis hop size in samples. Frame indices produced by the other
    /// operations count hops of this size.
    fn hop_size(&self) -> usize;

    /// Decode an audio file into mono samples plus sample rate
    fn decode(&self, audio_path: &Path) -> Result<DecodedAudio>;

    /// Estimate the tempo and the beat positions of the signal
    fn tempo_and_beats(&self, audio: &DecodedAudio) -> Result<TempoEstimate>;

    /// Compute the per-frame onset-strength envelope of the signal
    fn onset_strength(&self, audio: &DecodedAudio) -> Result<OnsetEnvelope>;

    /// Extract the detected onset frame indices from the envelope
    fn detect_onsets(&self, envelope: &OnsetEnvelope) -> Result<Vec<u64>>;

    /// Convert frame indices to time offsets in seconds
    fn frames_to_time(&self, frames: &[u64], sample_rate: u32) -> Vec<f64> {
        let hop = self.hop_size() as f64;
        frames
            .iter()
            .map(|&frame| frame as f64 * hop / sample_rate as f64)
            .collect()
    }
}

/// Decoded audio signal
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Mono samples, channels averaged
    pub samples: Vec<f32>,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Tempo and beat estimation result
#[derive(Debug, Clone)]
pub struct TempoEstimate {
    /// Primary tempo estimate in beats per minute
    pub bpm: f32,

    /// Frame index of each detected beat, in chronological order
    pub beat_frames: Vec<u64>,
}

/// Per-frame onset-strength envelope.
///
/// The detector emits the novelty value and the peak decision from the same
/// streaming pass over the signal, so the envelope carries the frames at
/// which it fired; onset extraction is then a function of the envelope alone.
#[derive(Debug, Clone)]
pub struct OnsetEnvelope {
    /// Novelty value per frame
    pub strengths: Vec<f32>,

    /// Frames at which the detector fired, in chronological order
    pub onset_frames: Vec<u64>,
}

impl OnsetEnvelope {
    /// Number of frames in the envelope
    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }
}
