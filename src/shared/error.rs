use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish an incompatible
/// build verdict from argument or application failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested check reported a compatible (or vacuous) verdict
    Success = 0,
    /// A compatibility check reported an incompatible verdict
    IncompatibleBuild = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (advice endpoint failure, GitHub API error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a verdict to its exit code
    pub fn from_verdict(is_compatible: bool) -> Self {
        if is_compatible {
            ExitCode::Success
        } else {
            ExitCode::IncompatibleBuild
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IncompatibleBuild => write!(f, "Incompatible Build (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the compatibility checker.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
/// Catalog acquisition failures never appear here: the catalog source
/// recovers locally by serving the built-in reference dataset.
#[derive(Debug, Error)]
pub enum CompatError {
    #[error("Invalid catalog endpoint: {url}\nReason: {reason}\n\n💡 Hint: Pass a base URL such as https://api.example.com")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Advice request to model '{model}' failed\nDetails: {details}\n\n💡 Hint: Verify that Ollama is running locally (ollama serve) and the model is pulled")]
    AdviceUnavailable { model: String, details: String },

    #[error("GitHub lookup failed for {resource}\nDetails: {details}\n\n💡 Hint: Check your network connection and GitHub API rate limits")]
    MetadataFetch { resource: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to append to conversation log: {path}\nDetails: {details}\n\n💡 Hint: Check that the log file location is writable")]
    LogWrite { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}
