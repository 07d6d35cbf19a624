//! Page rendering errors.

use thiserror::Error;

/// Failure to produce a rendered document.
///
/// Always fatal for the current check: no result can be extracted.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Browser not found: {0}")]
    BrowserNotFound(String),

    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
