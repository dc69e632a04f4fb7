use std::fs;
use std::path::{Component, Path};

use crate::activity_log::ActivityLog;
use crate::folder::{list_entries, print_listing};
use crate::models::DeletionOutcome;
use crate::prompt::Prompt;

pub const CONFIRM_PROMPT: &str =
    "\nWould you like to delete a file from the student files folder? (Yes/No): ";
pub const FILE_NAME_PROMPT: &str = "Enter the exact file name to delete: ";

/// Offers to delete one file from the working folder, then lists what remains.
pub fn ask_and_delete(
    folder: &Path,
    prompt: &mut dyn Prompt,
    log: &ActivityLog,
) -> DeletionOutcome {
    let answer = match prompt.ask(CONFIRM_PROMPT) {
        Ok(Some(answer)) => answer,
        Ok(None) | Err(_) => {
            println!("\nInput cancelled by user.");
            return DeletionOutcome::Cancelled;
        }
    };

    if !answer.trim().eq_ignore_ascii_case("yes") {
        println!("No deletion requested.");
        return DeletionOutcome::Declined;
    }

    let requested = match prompt.ask(FILE_NAME_PROMPT) {
        Ok(Some(name)) => name.trim().to_string(),
        Ok(None) | Err(_) => String::new(),
    };

    if !is_plain_file_name(&requested) || !folder.join(&requested).exists() {
        let msg = format!("Deletion failed: file '{requested}' not found.");
        println!("{msg}");
        log.append(&msg);
        return DeletionOutcome::NotFound(requested);
    }

    let outcome = match fs::remove_file(folder.join(&requested)) {
        Ok(()) => {
            let msg = format!("{requested} deleted successfully.");
            println!("{msg}");
            log.append(&msg);
            tracing::info!(file = %requested, "file deleted");
            DeletionOutcome::Deleted(requested)
        }
        Err(err) => {
            eprintln!("Failed to delete '{requested}': {err}");
            DeletionOutcome::Failed(requested)
        }
    };

    match list_entries(folder) {
        Ok(remaining) => print_listing("Remaining files in the student files folder:", &remaining),
        Err(err) => {
            let msg = format!("Failed to list the student files folder: {err}");
            eprintln!("{msg}");
            log.append(&msg);
        }
    }

    outcome
}

/// Only a single, ordinary name inside the folder may be deleted.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
