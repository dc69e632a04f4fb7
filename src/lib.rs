//! Student records utilities: an interactive record-file manager and a
//! score report generator.

pub mod activity_log;
pub mod archive;
pub mod deletion;
pub mod error;
pub mod folder;
pub mod inspect;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod records;
pub mod report;
pub mod scoring;
pub mod workflow;
