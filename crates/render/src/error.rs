//! Render Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};

/// A render error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("chrome/chromium not detected on this system")]
    BrowserNotFound,
    /// The browser process could not be started or the DevTools connection
    /// could not be established.
    #[display("failed to launch browser: {_0}")]
    BrowserLaunch(#[error(not(source))] String),
    /// The page failed to load. Remote URLs may succeed on retry.
    #[display("navigation failed: {_0}")]
    Navigation(#[error(not(source))] String),
    #[display("script evaluation failed: {_0}")]
    Script(#[error(not(source))] String),
    #[display("PDF generation failed: {_0}")]
    Print(#[error(not(source))] String),
    /// Asset was not loadable (either file or builtin).
    #[display("asset not found: {_0}")]
    AssetNotFound(#[error(not(source))] String),
    /// Input looked like a file path but no such file exists.
    #[display("file not found: {_0}")]
    FileNotFound(#[error(not(source))] String),
    #[display("invalid options: {_0}")]
    InvalidOptions(#[error(not(source))] String),
    Io,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Navigation(_))
    }
}
