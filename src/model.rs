//! Output report model and timestamp formatting

use serde::Serialize;

/// The analysis report written to the output JSON file.
///
/// `beat_times` and `intense_moments` hold seconds-from-start timestamps
/// rendered with exactly 3 fractional digits. They come from independent
/// detection passes and may interleave arbitrarily.
#[derive(Debug, Clone, Serialize)]
pub struct RhythmReport {
    /// Estimated tempo in beats per minute
    pub tempo: f32,

    /// One timestamp per detected beat, in chronological order
    pub beat_times: Vec<String>,

    /// One timestamp per detected onset event
    pub intense_moments: Vec<String>,
}

impl RhythmReport {
    /// Build the report from the tempo scalar and the two time sequences
    /// (in seconds).
    pub fn assemble(tempo: f32, beat_times: &[f64], intense_moments: &[f64]) -> Self {
        Self {
            tempo,
            beat_times: beat_times.iter().map(|&t| format_seconds(t)).collect(),
            intense_moments: intense_moments.iter().map(|&t| format_seconds(t)).collect(),
        }
    }
}

/// Format a time offset with exactly 3 digits after the decimal point,
/// regardless of magnitude.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds_pads_to_three_digits() {
        assert_eq!(format_seconds(0.0), "0.000");
        assert_eq!(format_seconds(12.34), "12.340");
        assert_eq!(format_seconds(0.5), "0.500");
    }

    #[test]
    fn test_format_seconds_truncates_to_three_digits() {
        assert_eq!(format_seconds(1.23456), "1.235");
        assert_eq!(format_seconds(123.4567), "123.457");
    }

    #[test]
    fn test_assemble_keeps_order_and_formats() {
        let report = RhythmReport::assemble(128.0, &[0.5, 1.0, 1.5], &[0.25, 1.75]);

        assert_eq!(report.tempo, 128.0);
        assert_eq!(report.beat_times, vec!["0.500", "1.000", "1.500"]);
        assert_eq!(report.intense_moments, vec!["0.250", "1.750"]);
    }

    #[test]
    fn test_assemble_empty_sequences() {
        let report = RhythmReport::assemble(90.0, &[], &[]);

        assert!(report.beat_times.is_empty());
        assert!(report.intense_moments.is_empty());
    }
}
