use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::models::{ReportRow, StudentRecord};
use crate::scoring;

pub const REPORT_HEADER: [&str; 3] = ["id", "name", "average"];

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("student.json"),
            output: PathBuf::from("report.csv"),
        }
    }
}

pub fn load_students(path: &Path) -> Result<Vec<StudentRecord>, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::InputMissing(path.to_path_buf()),
        _ => ReportError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(serde_json::from_str(&text)?)
}

pub fn write_csv(rows: &[ReportRow], path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;
    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn build_report(students: &[StudentRecord]) -> Vec<ReportRow> {
    let mut rows = scoring::score_students(students);
    scoring::rank_by_average(&mut rows);
    rows
}

/// Loads, scores and writes the report. Every failure is printed and the
/// run ends without a CSV when the input could not be read.
pub fn run(config: &ReportConfig) -> Option<usize> {
    let students = match load_students(&config.input) {
        Ok(students) => students,
        Err(err) => {
            tracing::warn!(input = %config.input.display(), error = %err, "report skipped");
            println!("{err}");
            return None;
        }
    };

    let rows = build_report(&students);
    match write_csv(&rows, &config.output) {
        Ok(()) => {
            println!("Report written to {}", config.output.display());
            Some(rows.len())
        }
        Err(err) => {
            println!("{err}");
            None
        }
    }
}
