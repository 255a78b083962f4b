//! JSON report writer

use crate::model::RhythmReport;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the report as 4-space-indented JSON, creating the destination
/// file or overwriting it if it already exists.
pub fn write_report(report: &RhythmReport, path: &Path) -> Result<()> {
    log::info!("Saving beat timings and intense moments to {:?}...", path);

    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut writer, formatter);
    report
        .serialize(&mut ser)
        .with_context(|| format!("Failed to serialize report to {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {:?}", path))?;

    log::info!("Analysis complete. Estimated tempo: {:.2} BPM", report.tempo);
    log::info!(
        "Beat timings and intense moments successfully saved in {:?}.",
        path
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_uses_four_space_indent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("report.json");

        let report = RhythmReport::assemble(120.0, &[0.5], &[0.25]);
        write_report(&report, &path).expect("Failed to write report");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n    \"tempo\""));
        assert!(content.contains("    \"beat_times\": [\n        \"0.500\"\n    ]"));
        assert!(content.contains("    \"intense_moments\": [\n        \"0.250\"\n    ]"));
    }

    #[test]
    fn test_write_report_fails_without_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing/report.json");

        let report = RhythmReport::assemble(120.0, &[], &[]);
        let result = write_report(&report, &path);

        assert!(result.is_err());
    }
}
