use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::InspectError;
use crate::models::FileInfo;
use crate::records::DISPLAY_TIMESTAMP_FORMAT;

pub fn inspect_file(path: &Path) -> Result<FileInfo, InspectError> {
    let contents = fs::read_to_string(path).map_err(InspectError::Read)?;
    let metadata = fs::metadata(path).map_err(InspectError::Metadata)?;
    let modified = metadata.modified().map_err(InspectError::Metadata)?;

    Ok(FileInfo {
        contents,
        size_bytes: metadata.len(),
        modified: DateTime::<Local>::from(modified),
    })
}

pub fn render_file_info(info: &FileInfo) -> String {
    format!(
        "\n--- File contents ---\n{}\nFile size: {} bytes\nLast modified: {}",
        info.contents.trim_end_matches('\n'),
        info.size_bytes,
        info.modified.format(DISPLAY_TIMESTAMP_FORMAT)
    )
}
