//! Assessment rendering

pub mod formatter;

pub use formatter::{error_json, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter};
