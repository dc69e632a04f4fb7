use std::path::PathBuf;

use chrono::NaiveDate;

use crate::activity_log::ActivityLog;
use crate::archive::backup_and_archive;
use crate::deletion::ask_and_delete;
use crate::error::SetupError;
use crate::folder::ensure_working_folder;
use crate::inspect::{inspect_file, render_file_info};
use crate::models::DeletionOutcome;
use crate::prompt::Prompt;
use crate::records::create_record_file;

#[derive(Debug, Clone)]
pub struct FileManagerConfig {
    pub folder: PathBuf,
    pub log_file: String,
    pub archive_dir: String,
}

impl Default for FileManagerConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("StudentFiles"),
            log_file: "activity_log.txt".to_string(),
            archive_dir: "Archive".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowSummary {
    pub folder: PathBuf,
    pub record_path: PathBuf,
    pub archived: Option<Vec<String>>,
    pub deletion: DeletionOutcome,
}

/// Runs the record-file workflow end to end. Only folder and record file
/// failures are returned; every later step degrades in place.
pub fn run(
    config: &FileManagerConfig,
    today: NaiveDate,
    prompt: &mut dyn Prompt,
) -> Result<WorkflowSummary, SetupError> {
    let folder = ensure_working_folder(&config.folder).inspect_err(|err| eprintln!("{err}"))?;
    println!("Student folder located at: {}", folder.path.display());
    let log = ActivityLog::new(&folder.path, &config.log_file);

    let record = create_record_file(&folder.path, today, prompt, &log)?;

    match inspect_file(&record.path) {
        Ok(info) => println!("{}", render_file_info(&info)),
        Err(err) => {
            eprintln!("{err}");
            log.append(&err.to_string());
        }
    }

    let archived = backup_and_archive(&folder.path, &config.archive_dir, &record, &log);
    if archived.is_some() {
        log.append(&format!("{} created and archived successfully.", record.file_name));
    }

    let deletion = ask_and_delete(&folder.path, prompt, &log);

    Ok(WorkflowSummary {
        folder: folder.path,
        record_path: record.path,
        archived,
        deletion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::list_entries;
    use crate::prompt::ScriptedPrompt;
    use tempfile::TempDir;

    fn config_in(dir: &std::path::Path) -> FileManagerConfig {
        FileManagerConfig {
            folder: dir.join("StudentFiles"),
            ..FileManagerConfig::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn full_run_archives_and_declines_deletion() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        let mut prompt = ScriptedPrompt::new(["Alice", "Bob", "Carol", "Dan", "Eve", "no"]);

        let summary = run(&config, today(), &mut prompt).unwrap();

        assert_eq!(
            summary.archived,
            Some(vec!["backup_records_2026-10-18.txt".to_string()])
        );
        assert_eq!(summary.deletion, DeletionOutcome::Declined);
        assert_eq!(
            list_entries(&summary.folder).unwrap(),
            vec!["Archive", "activity_log.txt", "records_2026-10-18.txt"]
        );

        let log_text = std::fs::read_to_string(summary.folder.join("activity_log.txt")).unwrap();
        let messages: Vec<&str> = log_text
            .lines()
            .map(|line| line.split_once("] ").unwrap().1)
            .collect();
        assert_eq!(
            messages,
            vec![
                "records_2026-10-18.txt created successfully.",
                "records_2026-10-18.txt created and archived successfully.",
            ]
        );
    }

    #[test]
    fn run_can_delete_the_record_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        let mut prompt = ScriptedPrompt::new([
            "A",
            "B",
            "C",
            "D",
            "E",
            "Yes",
            "records_2026-10-18.txt",
        ]);

        let summary = run(&config, today(), &mut prompt).unwrap();

        assert_eq!(
            summary.deletion,
            DeletionOutcome::Deleted("records_2026-10-18.txt".to_string())
        );
        assert!(!summary.record_path.exists());
        assert!(summary
            .folder
            .join("Archive")
            .join("backup_records_2026-10-18.txt")
            .exists());
    }

    #[test]
    fn missing_names_abort_the_run() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        let mut prompt = ScriptedPrompt::new(["only one"]);

        let err = run(&config, today(), &mut prompt).unwrap_err();

        assert!(matches!(err, SetupError::RecordFile { .. }));
        assert!(!config.folder.join("Archive").exists());
    }

    #[test]
    fn unusable_folder_aborts_before_prompting() {
        let temp_dir = TempDir::new().unwrap();
        let config = FileManagerConfig {
            folder: temp_dir.path().join("missing").join("StudentFiles"),
            ..FileManagerConfig::default()
        };
        let mut prompt = ScriptedPrompt::new(["A", "B", "C", "D", "E"]);

        assert!(matches!(
            run(&config, today(), &mut prompt),
            Err(SetupError::Folder { .. })
        ));
        assert!(prompt.asked().is_empty());
    }
}
