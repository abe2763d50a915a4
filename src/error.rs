use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user as transient notifications.
///
/// Every variant is recoverable: the user can always stage a new image and
/// try again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Please select a valid image file (detected {0})")]
    InvalidType(String),

    #[error("File must be less than 10MB ({0} bytes)")]
    TooLarge(u64),

    #[error("No MRI file selected.")]
    NoImageSelected,

    #[error("Unable to read file: {0}")]
    Unreadable(String),

    #[error("Failed to analyze MRI: {0}")]
    AnalysisFailed(FailureKind),

    #[error("Prediction service returned an unusable response: {0}")]
    MalformedResponse(String),
}

/// Why a prediction request did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response (connect error, timeout, reset).
    Unreachable(String),
    /// The backend answered with a non-2xx status.
    Status(u16),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Unreachable(reason) => write!(f, "service unreachable ({reason})"),
            FailureKind::Status(code) => write!(f, "service responded with status {code}"),
        }
    }
}

impl AppError {
    pub fn unreachable(reason: impl Into<String>) -> Self {
        AppError::AnalysisFailed(FailureKind::Unreachable(reason.into()))
    }

    /// Only transport failures qualify for the demo substitute.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, AppError::AnalysisFailed(FailureKind::Unreachable(_)))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("failed to parse config {path}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("invalid prediction endpoint `{endpoint}`: {error}")]
    InvalidEndpoint { endpoint: String, error: String },
}

/// Fatal errors that stop the client before or while the window runs.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("window error: {0}")]
    Ui(#[from] iced::Error),
}
