use std::fs;
use std::path::{Path, PathBuf};

use crate::activity_log::ActivityLog;
use crate::error::ArchiveError;
use crate::folder::{list_entries, print_listing};
use crate::models::RecordFile;

pub fn backup_name(file_name: &str) -> String {
    format!("backup_{file_name}")
}

/// Copies the record file to `backup_<name>`, moves that copy into the
/// archive folder and returns the archive listing.
///
/// Each step is reported and logged on failure, after which the remaining
/// steps are skipped and `None` is returned.
pub fn backup_and_archive(
    folder: &Path,
    archive_dir: &str,
    record: &RecordFile,
    log: &ActivityLog,
) -> Option<Vec<String>> {
    match run_steps(folder, archive_dir, record) {
        Ok(listing) => Some(listing),
        Err(err) => {
            tracing::warn!(file = %record.file_name, error = %err, "archive step failed");
            eprintln!("{err}");
            log.append(&err.to_string());
            None
        }
    }
}

fn run_steps(
    folder: &Path,
    archive_dir: &str,
    record: &RecordFile,
) -> Result<Vec<String>, ArchiveError> {
    let backup = backup_name(&record.file_name);
    let backup_path = folder.join(&backup);
    fs::copy(&record.path, &backup_path).map_err(ArchiveError::Backup)?;
    println!("Backup created: {backup}");

    let archive_path = folder.join(archive_dir);
    let moved = move_into(&backup_path, &archive_path, &backup).map_err(ArchiveError::Move)?;
    println!("Backup moved to Archive: {}", moved.display());

    let listing = list_entries(&archive_path).map_err(ArchiveError::List)?;
    print_listing("Files in archive folder:", &listing);
    Ok(listing)
}

fn move_into(source: &Path, dir: &Path, name: &str) -> std::io::Result<PathBuf> {
    if !dir.is_dir() {
        fs::create_dir(dir)?;
    }
    let target = dir.join(name);
    // rename replaces an archived copy left by an earlier run on the same day
    fs::rename(source, &target)?;
    Ok(target)
}
