use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::activity_log::ActivityLog;
use crate::error::SetupError;
use crate::models::RecordFile;
use crate::prompt::Prompt;

pub const RECORD_NAME_COUNT: usize = 5;
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn record_file_name(date: NaiveDate) -> String {
    format!("records_{date}.txt")
}

/// Asks for the day's names and writes them to `records_<date>.txt`,
/// replacing any file already written for that date.
pub fn create_record_file(
    folder: &Path,
    date: NaiveDate,
    prompt: &mut dyn Prompt,
    log: &ActivityLog,
) -> Result<RecordFile, SetupError> {
    let file_name = record_file_name(date);
    let path = folder.join(&file_name);

    let written = collect_names(prompt).and_then(|names| write_names(&path, &names));
    if let Err(source) = written {
        let err = SetupError::RecordFile { file_name, source };
        eprintln!("{err}");
        log.append(&err.to_string());
        return Err(err);
    }

    let record = RecordFile {
        file_name,
        path,
        created_at: Local::now(),
    };
    println!(
        "{} created at {}",
        record.file_name,
        record.created_at.format(DISPLAY_TIMESTAMP_FORMAT)
    );
    log.append(&format!("{} created successfully.", record.file_name));
    tracing::info!(path = %record.path.display(), "record file written");

    Ok(record)
}

fn collect_names(prompt: &mut dyn Prompt) -> io::Result<Vec<String>> {
    println!("Please enter five student names");
    let mut names = Vec::with_capacity(RECORD_NAME_COUNT);
    for index in 1..=RECORD_NAME_COUNT {
        let answer = prompt.ask(&format!("Student {index}: "))?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed before student {index} was entered"),
            )
        })?;
        names.push(answer.trim().to_string());
    }
    Ok(names)
}

fn write_names(path: &Path, names: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for name in names {
        writeln!(writer, "{name}")?;
    }
    writer.flush()
}
