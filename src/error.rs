//! Exit codes and structured error output.

use serde::Serialize;

/// Exit codes for osu-cleaner.
///
/// - 0: Success (files were removed, or listed in dry-run mode)
/// - 1: General error (bad Songs directory, terminal failure, ...)
/// - 2: Nothing to delete
/// - 3: Partial success (some files could not be removed or read)
/// - 4: Aborted at the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Completed and removed (or listed) at least one file.
    Success = 0,
    /// An unexpected error occurred.
    GeneralError = 1,
    /// Completed but nothing matched the selected categories.
    NothingToDelete = 2,
    /// Completed, but some files could not be removed or map files read.
    PartialSuccess = 3,
    /// The user declined to continue.
    Aborted = 4,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "OC000",
            Self::GeneralError => "OC001",
            Self::NothingToDelete => "OC002",
            Self::PartialSuccess => "OC003",
            Self::Aborted => "OC004",
        }
    }
}

/// Structured error information for `--json-errors`.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "OC001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message, including its causes
    pub message: String,
}

impl StructuredError {
    /// Create a structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}
