//! Error types shared by the file manager and report generator.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the file manager before its workflow can start.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to create or access folder '{}': {source}", .path.display())]
    Folder {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error creating file '{file_name}': {source}")]
    RecordFile {
        file_name: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to get file info: {0}")]
    Metadata(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to create backup: {0}")]
    Backup(#[source] std::io::Error),

    #[error("Failed to move backup to Archive: {0}")]
    Move(#[source] std::io::Error),

    #[error("Failed to list Archive folder: {0}")]
    List(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Error: {} not found. Please provide a file and try again.", .0.display())]
    InputMissing(PathBuf),

    #[error("Error: Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing csv: {0}")]
    Write(#[from] csv::Error),
}
