//! Real audio analyzer implementation
//!
//! Decodes audio to PCM using symphonia and delegates tempo, beat and onset
//! detection to aubio's spectral-flux trackers.

use super::decoder::decode_to_mono;
use super::traits::{AudioAnalyzer, DecodedAudio, OnsetEnvelope, TempoEstimate};
use anyhow::Result;
use aubio_rs::{Onset, OnsetMode, Tempo};
use std::path::Path;

/// Audio analyzer backed by aubio
pub struct RealAnalyzer {
    /// FFT window size for the detectors
    buf_size: usize,
    /// Hop size in samples; one analysis frame per hop
    hop_size: usize,
}

impl RealAnalyzer {
    /// Create an analyzer with the default analysis window
    /// (buf_size=1024, hop_size=512, good general-purpose values at 44100Hz)
    pub fn new() -> Self {
        Self {
            buf_size: 1024,
            hop_size: 512,
        }
    }

    /// Create an analyzer with a custom analysis window
    pub fn with_analysis_window(mut self, buf_size: usize, hop_size: usize) -> Self {
        self.buf_size = buf_size;
        self.hop_size = hop_size;
        self
    }

    fn check_length(&self, audio: &DecodedAudio) -> Result<()> {
        if audio.samples.len() < self.hop_size * 10 {
            anyhow::bail!("Audio too short for rhythm analysis");
        }
        Ok(())
    }
}

impl Default for RealAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioAnalyzer for RealAnalyzer {
    fn hop_size(&self) -> usize {
        self.hop_size
    }

    fn decode(&self, audio_path: &Path) -> Result<DecodedAudio> {
        log::debug!("Decoding: {:?}", audio_path);
        decode_to_mono(audio_path)
    }

    fn tempo_and_beats(&self, audio: &DecodedAudio) -> Result<TempoEstimate> {
        self.check_length(audio)?;

        // SpecFlux is a good general-purpose onset detection method for tempo
        let mut tempo = Tempo::new(
            OnsetMode::SpecFlux,
            self.buf_size,
            self.hop_size,
            audio.sample_rate,
        )
        .map_err(|e| anyhow::anyhow!("Failed to create tempo detector: {:?}", e))?;

        let mut beat_frames: Vec<u64> = Vec::new();
        let mut last_bpm = 0.0;

        for chunk in audio.samples.chunks(self.hop_size) {
            if chunk.len() < self.hop_size {
                break;
            }

            // aubio expects exactly hop_size samples
            let input: Vec<f32> = chunk.to_vec();

            let beat = tempo
                .do_result(&input)
                .map_err(|e| anyhow::anyhow!("Tempo processing failed: {:?}", e))?;

            if beat > 0.0 {
                beat_frames.push(tempo.get_last() as u64 / self.hop_size as u64);
            }

            let current_bpm = tempo.get_bpm();
            if current_bpm > 0.0 {
                last_bpm = current_bpm;
            }
        }

        // Use last known good BPM if the final readout is 0
        let detected_bpm = tempo.get_bpm();
        let bpm = if detected_bpm > 0.0 {
            detected_bpm
        } else {
            last_bpm
        };

        if bpm <= 0.0 {
            anyhow::bail!("Could not estimate tempo");
        }

        beat_frames.dedup();

        log::debug!(
            "Estimated {:.1} BPM, {} beats (confidence: {:.2})",
            bpm,
            beat_frames.len(),
            tempo.get_confidence()
        );

        Ok(TempoEstimate { bpm, beat_frames })
    }

    fn onset_strength(&self, audio: &DecodedAudio) -> Result<OnsetEnvelope> {
        self.check_length(audio)?;

        let mut onset = Onset::new(
            OnsetMode::SpecFlux,
            self.buf_size,
            self.hop_size,
            audio.sample_rate,
        )
        .map_err(|e| anyhow::anyhow!("Failed to create onset detector: {:?}", e))?;

        let mut strengths: Vec<f32> = Vec::new();
        let mut onset_frames: Vec<u64> = Vec::new();

        for chunk in audio.samples.chunks(self.hop_size) {
            if chunk.len() < self.hop_size {
                break;
            }

            let input: Vec<f32> = chunk.to_vec();

            let hit = onset
                .do_result(&input)
                .map_err(|e| anyhow::anyhow!("Onset processing failed: {:?}", e))?;

            strengths.push(onset.get_descriptor());

            if hit > 0.0 {
                onset_frames.push(onset.get_last() as u64 / self.hop_size as u64);
            }
        }

        onset_frames.dedup();

        log::debug!(
            "Onset strength envelope: {} frames, {} detections",
            strengths.len(),
            onset_frames.len()
        );

        Ok(OnsetEnvelope {
            strengths,
            onset_frames,
        })
    }

    fn detect_onsets(&self, envelope: &OnsetEnvelope) -> Result<Vec<u64>> {
        log::debug!(
            "Extracting {} onsets from a {}-frame envelope",
            envelope.onset_frames.len(),
            envelope.len()
        );

        Ok(envelope.onset_frames.clone())
    }
}
