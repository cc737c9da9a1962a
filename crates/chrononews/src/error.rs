//! Error types for the chrononews crate.
//!
//! Each concern carries its own semantic error enum in `thiserror` style:
//! pool selection, calendar validation, theme catalogue parsing, and atomic
//! file export. CLI orchestration errors live in [`crate::news_cli`].

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by seeded pool selection.
///
/// An empty pool is a configuration defect, not a runtime condition: it is
/// surfaced immediately and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// The selection pool contains no candidates.
    #[error("selection pool is empty")]
    EmptyPool,
}

/// Errors raised by calendar date validation.
///
/// The variants mirror the checks the input form performs, in order:
/// numeric shape, year range, month range, day range, and finally the day
/// against the actual length of the month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input is not three dot-separated numeric components.
    #[error("malformed date '{input}': expected day.month.year")]
    MalformedDate {
        /// The rejected input text.
        input: String,
    },

    /// The year is outside [1, 9999].
    #[error("year must be between 1 and 9999, got {value}")]
    InvalidYear {
        /// The rejected year value.
        value: u32,
    },

    /// The month is outside [1, 12].
    #[error("month must be between 1 and 12, got {value}")]
    InvalidMonth {
        /// The rejected month value.
        value: u32,
    },

    /// The day is outside [1, 31].
    #[error("day must be between 1 and 31, got {value}")]
    InvalidDay {
        /// The rejected day value.
        value: u32,
    },

    /// The day exceeds the length of the given month.
    #[error("month {month} has only {days_in_month} days")]
    DayOutOfRangeForMonth {
        /// Month the day was checked against.
        month: u8,
        /// Number of days in that month for the given year.
        days_in_month: u8,
    },
}

/// Errors raised when loading or querying a theme catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalogue file could not be read.
    #[error("failed to read theme catalogue at '{path}': {message}")]
    IoError {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid theme catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// The catalogue contains no themes.
    #[error("theme catalogue contains no themes")]
    EmptyThemes,

    /// A theme declares a colour that is not a `#RRGGBB` value.
    #[error("theme '{theme}' has invalid colour '{value}'")]
    InvalidColour {
        /// Name of the offending theme.
        theme: String,
        /// The rejected colour value.
        value: String,
    },

    /// The requested theme name was not found in the catalogue.
    #[error("theme '{name}' not found in catalogue")]
    ThemeNotFound {
        /// The theme name that was not found.
        name: String,
    },
}

/// Error raised when an atomic file export fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write '{path}': {message}")]
pub struct WriteError {
    /// Target path of the failed write.
    pub path: Utf8PathBuf,
    /// Description of the underlying failure.
    pub message: String,
}
