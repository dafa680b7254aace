//! # Core Type Definitions
//!
//! Error type shared by the core and the console binary.

use thiserror::Error;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors that can occur in the campus console.
///
/// - No silent failures
/// - Use `Result<T, CampusError>` for fallible operations
/// - The progress tracker itself never fails; only inputs do
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampusError {
    /// The draft was submitted with an empty or whitespace-only description.
    #[error("Please enter incident description")]
    EmptyDescription,

    /// A stage list must contain at least one stage.
    #[error("Stage list must contain at least one stage")]
    EmptyStageList,

    /// Configuration could not be parsed or is out of range.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}
