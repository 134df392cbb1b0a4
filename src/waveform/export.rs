//! CSV export of the current waveform ("print" trigger).
//!
//! The first line is the `index,time_s,amplitude` header, followed by one
//! row per sample. The export time lives in the default file name.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::Waveform;
use crate::error::{Result, ResultExt, TrainerError};

/// Default file extension for exported waveforms
pub const EXPORT_FILE_EXTENSION: &str = "csv";

/// Time axis used for both the plot and exported rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    /// Time of the first sample in seconds
    pub start: f64,
    /// Spacing between samples in seconds
    pub seconds_per_sample: f64,
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self {
            start: 12.0,
            seconds_per_sample: 0.03,
        }
    }
}

/// Suggested file name, e.g. `ecg_waveform_20261019_142501.csv`
pub fn default_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!(
        "ecg_waveform_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        EXPORT_FILE_EXTENSION
    )
}

/// Write `waveform` as CSV to any writer. Returns the number of rows written.
pub fn write_csv<W: Write>(waveform: &Waveform, axis: TimeAxis, mut writer: W) -> Result<usize> {
    if waveform.is_empty() {
        return Err(TrainerError::Export("No waveform to export".to_string()));
    }

    writeln!(writer, "index,time_s,amplitude")?;

    for (i, [t, v]) in waveform
        .as_plot_points(axis.start, axis.seconds_per_sample)
        .into_iter()
        .enumerate()
    {
        writeln!(writer, "{},{:.4},{:.6}", i, t, v)?;
    }

    writer.flush()?;
    Ok(waveform.len())
}

/// Write `waveform` as CSV to a file, creating or truncating it
pub fn export_to_file(waveform: &Waveform, axis: TimeAxis, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;

    let rows = write_csv(waveform, axis, BufWriter::new(file))
        .with_context(|| format!("Failed to export waveform to {:?}", path))?;

    tracing::info!("Exported {} waveform samples to {:?}", rows, path);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_write_csv_rows() {
        let wave = Waveform::from_samples(vec![0.0, 1.5, -0.25]);
        let mut buf = Vec::new();
        let rows = write_csv(&wave, TimeAxis::default(), &mut buf).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "index,time_s,amplitude",
                "0,12.0000,0.000000",
                "1,12.0300,1.500000",
                "2,12.0600,-0.250000",
            ]
        );
    }

    #[test]
    fn test_write_csv_is_deterministic() {
        let wave = Waveform::from_samples(vec![0.1, 0.2]);
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_csv(&wave, TimeAxis::default(), &mut first).unwrap();
        write_csv(&wave, TimeAxis::default(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_waveform_rejected() {
        let err = write_csv(&Waveform::default(), TimeAxis::default(), Vec::new()).unwrap_err();
        assert!(matches!(err, TrainerError::Export(_)));
    }

    #[test]
    fn test_default_file_name() {
        let now = chrono::Local.with_ymd_and_hms(2026, 10, 19, 14, 25, 1).unwrap();
        assert_eq!(default_file_name(now), "ecg_waveform_20261019_142501.csv");
    }
}
