use std::path::PathBuf;

pub const DEFAULT_SOURCE_DIR: &str = ".";
pub const DEFAULT_FILE_MARKER: &str = "price";
pub const DEFAULT_REPORT_PATH: &str = "output.html";
pub const DEFAULT_EXIT_COMMAND: &str = "exit";

/// Runtime settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory scanned for price lists.
    pub source_dir: PathBuf,
    /// Case-insensitive substring a file name must contain to be loaded.
    pub file_marker: String,
    /// Where the HTML report is written on shutdown.
    pub report_path: PathBuf,
    /// Console input that ends the session (case-insensitive).
    pub exit_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            file_marker: DEFAULT_FILE_MARKER.to_string(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            exit_command: DEFAULT_EXIT_COMMAND.to_string(),
        }
    }
}
