pub mod report;

pub use report::{run_report_command, ReportCommand};
