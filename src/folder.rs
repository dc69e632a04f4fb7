use std::fs;
use std::path::Path;

use crate::error::SetupError;
use crate::models::WorkingFolder;

/// Creates `path` when absent and returns its absolute location.
pub fn ensure_working_folder(path: &Path) -> Result<WorkingFolder, SetupError> {
    let folder_error = |source: std::io::Error| SetupError::Folder {
        path: path.to_path_buf(),
        source,
    };

    let created = if path.is_dir() {
        false
    } else {
        fs::create_dir(path).map_err(folder_error)?;
        true
    };
    let absolute = std::path::absolute(path).map_err(folder_error)?;

    tracing::debug!(path = %absolute.display(), created, "working folder ready");
    Ok(WorkingFolder {
        path: absolute,
        created,
    })
}

/// Entry names of `dir`, sorted so listings are stable between runs.
pub fn list_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

pub fn print_listing(heading: &str, names: &[String]) {
    println!("\n{heading}");
    for name in names {
        println!("- {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn second_call_reuses_folder() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("StudentFiles");

        let first = ensure_working_folder(&target).unwrap();
        let second = ensure_working_folder(&target).unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.path, second.path);
        assert!(first.path.is_absolute());
        assert!(target.is_dir());
    }

    #[test]
    fn fails_when_parent_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("missing").join("StudentFiles");

        let err = ensure_working_folder(&target).unwrap_err();
        assert!(matches!(err, SetupError::Folder { .. }));
        assert!(err.to_string().starts_with("Failed to create or access folder"));
    }

    #[test]
    fn fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("StudentFiles");
        fs::write(&target, "not a folder").unwrap();

        assert!(ensure_working_folder(&target).is_err());
    }

    #[test]
    fn listing_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(temp_dir.path().join("Archive")).unwrap();

        let names = list_entries(temp_dir.path()).unwrap();
        assert_eq!(names, vec!["Archive", "a.txt", "b.txt"]);
    }
}
