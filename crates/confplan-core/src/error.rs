//! Error types for roster and schedule operations.
//!
//! This module defines the error types shared across the confplan crates
//! and provides a convenience [`Result`] alias.

use thiserror::Error;

/// Error types that can occur across the confplan crates.
///
/// Covers configuration validation, reorder contract violations, and the
/// failures surfaced by the extraction/import/template collaborators.
///
/// # Examples
///
/// ```
/// use confplan_core::{ConfplanError, Roster, RosterEntry};
///
/// let mut roster = Roster::from_entries([RosterEntry::new("A", "T1")]);
///
/// match roster.reorder(0, 5) {
///     Err(ConfplanError::IndexOutOfRange { index, len }) => {
///         eprintln!("index {index} is outside roster of {len}");
///     }
///     other => panic!("expected IndexOutOfRange, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ConfplanError {
    /// Invalid schedule configuration.
    ///
    /// Raised at the boundary instead of silently coercing bad numeric
    /// input, so a misconfigured break cadence is visible to the caller
    /// rather than producing a schedule with a break after every talk.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A reorder index fell outside the roster.
    ///
    /// This is a contract violation by the caller and is never clamped.
    #[error("Index {index} out of range for roster of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the roster at the time of the call.
        len: usize,
    },

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Document text extraction failed.
    ///
    /// Raised by the DOCX extraction backend when an archive cannot be
    /// opened or its content XML cannot be parsed.
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// Spreadsheet import failed.
    ///
    /// Raised by the XLSX/CSV roster backends for unreadable workbooks
    /// or malformed records.
    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(String),

    /// Certificate template rendering or bundling failed.
    #[error("Template error: {0}")]
    TemplateError(String),
}

/// Type alias for [`Result<T, ConfplanError>`].
pub type Result<T> = std::result::Result<T, ConfplanError>;
