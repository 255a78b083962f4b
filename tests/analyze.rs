use rhythm_analyzer::analysis::StubAnalyzer;
use rhythm_analyzer::{AnalysisConfig, AnalysisPipeline, RhythmError, RhythmReport};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a placeholder audio file; the stub analyzer never reads it, only
/// the input validator looks at it.
fn create_dummy_audio(dir: &Path) -> PathBuf {
    let path = dir.join("track.wav");
    fs::write(&path, b"dummy audio data").expect("Failed to create dummy audio file");
    path
}

fn run_stub_pipeline(audio: PathBuf, output: PathBuf) -> Result<RhythmReport, RhythmError> {
    let config = AnalysisConfig::new(audio, output);
    AnalysisPipeline::new(config, StubAnalyzer::new()).run()
}

/// Assert a timestamp string has exactly one decimal point followed by
/// exactly 3 digits.
fn assert_three_fractional_digits(value: &str) {
    let (whole, fraction) = value
        .split_once('.')
        .unwrap_or_else(|| panic!("Timestamp without decimal point: {value:?}"));

    assert!(
        !whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()),
        "Bad whole part in timestamp: {value:?}"
    );
    assert_eq!(
        fraction.len(),
        3,
        "Expected exactly 3 fractional digits: {value:?}"
    );
    assert!(
        fraction.chars().all(|c| c.is_ascii_digit()),
        "Non-digit fraction in timestamp: {value:?}"
    );
}

#[test]
fn test_report_has_exactly_the_schema_keys() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audio = create_dummy_audio(temp_dir.path());
    let output = temp_dir.path().join("report.json");

    run_stub_pipeline(audio, output.clone()).expect("Pipeline failed");

    let content = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let object = value.as_object().expect("Report is not a JSON object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["beat_times", "intense_moments", "tempo"]);

    assert!(object["tempo"].is_number());
    assert!(object["beat_times"].is_array());
    assert!(object["intense_moments"].is_array());
}

#[test]
fn test_timestamps_have_three_fractional_digits() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audio = create_dummy_audio(temp_dir.path());
    let output = temp_dir.path().join("report.json");

    let report = run_stub_pipeline(audio, output).expect("Pipeline failed");

    assert!(!report.beat_times.is_empty());
    assert!(!report.intense_moments.is_empty());

    for value in report.beat_times.iter().chain(&report.intense_moments) {
        assert_three_fractional_digits(value);
    }
}

#[test]
fn test_beat_times_are_non_decreasing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audio = create_dummy_audio(temp_dir.path());
    let output = temp_dir.path().join("report.json");

    let report = run_stub_pipeline(audio, output).expect("Pipeline failed");

    let times: Vec<f64> = report
        .beat_times
        .iter()
        .map(|t| t.parse().expect("Unparsable beat time"))
        .collect();

    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_missing_audio_fails_before_any_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audio = temp_dir.path().join("no_such_track.wav");
    let output = temp_dir.path().join("report.json");

    let err = run_stub_pipeline(audio.clone(), output.clone())
        .expect_err("Pipeline should fail on a missing audio file");

    assert!(matches!(err, RhythmError::MissingFile(_)));
    assert!(
        err.to_string().contains("no_such_track.wav"),
        "Message should name the missing path: {err}"
    );
    assert!(!output.exists(), "No output should be written on failure");
}

#[test]
fn test_missing_output_parent_fails_at_write_stage() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audio = create_dummy_audio(temp_dir.path());
    let output = temp_dir.path().join("missing_dir/report.json");

    let err = run_stub_pipeline(audio, output)
        .expect_err("Pipeline should fail when the output directory is missing");

    // Analysis succeeded; only the write stage failed
    assert!(matches!(err, RhythmError::Write(_)));
}

#[test]
fn test_overwrite_replaces_existing_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audio = create_dummy_audio(temp_dir.path());
    let output = temp_dir.path().join("report.json");

    fs::write(&output, "leftover content that is not JSON").unwrap();

    run_stub_pipeline(audio, output.clone()).expect("Pipeline failed");

    let content = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["tempo"], 120.0);
}

#[test]
fn test_reruns_are_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let audio = create_dummy_audio(temp_dir.path());
    let output = temp_dir.path().join("report.json");

    run_stub_pipeline(audio.clone(), output.clone()).expect("First run failed");
    let first = fs::read(&output).unwrap();

    run_stub_pipeline(audio, output.clone()).expect("Second run failed");
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}
