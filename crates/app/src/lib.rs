//! Stockroom application: the state container, the interactive shell and
//! its reports.

pub mod cli;
pub mod config;
pub mod report;
pub mod shell;
pub mod stockroom;

pub use config::ShellConfig;
pub use report::ReportFormat;
pub use shell::{Shell, ShellError};
pub use stockroom::{QueueSnapshot, Stockroom};
