use std::path::PathBuf;

use clap::Parser;

use student_records::logging;
use student_records::report::{self, ReportConfig};

#[derive(Parser)]
#[command(name = "student-report")]
#[command(about = "Average student scores from JSON into a ranked CSV report", long_about = None)]
struct Cli {
    /// JSON array of {id, name, scores} objects
    #[arg(long, default_value = "student.json")]
    input: PathBuf,
    /// CSV destination
    #[arg(long, default_value = "report.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing()?;

    let config = ReportConfig {
        input: cli.input,
        output: cli.output,
    };

    if let Some(rows) = report::run(&config) {
        tracing::debug!(rows, "report complete");
    }
    Ok(())
}
