use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use student_records::logging;
use student_records::prompt::{install_interrupt_flag, StdinPrompt};
use student_records::workflow::{self, FileManagerConfig};

#[derive(Parser)]
#[command(name = "student-files")]
#[command(about = "Record today's students, inspect, back up and archive the file", long_about = None)]
struct Cli {
    /// Working folder for records, backups and the activity log
    #[arg(long, default_value = "StudentFiles")]
    folder: PathBuf,
    #[arg(long, default_value = "activity_log.txt")]
    log_file: String,
    /// Subfolder receiving archived backups
    #[arg(long, default_value = "Archive")]
    archive_dir: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing()?;

    let config = FileManagerConfig {
        folder: cli.folder,
        log_file: cli.log_file,
        archive_dir: cli.archive_dir,
    };

    let mut prompt = StdinPrompt::spawn(install_interrupt_flag()?);
    match workflow::run(&config, Local::now().date_naive(), &mut prompt) {
        Ok(summary) => {
            tracing::debug!(deletion = ?summary.deletion, "workflow finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!(error = %err, "workflow aborted");
            Ok(ExitCode::FAILURE)
        }
    }
}
