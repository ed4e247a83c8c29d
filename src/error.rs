// src/error.rs

//! Unified error handling for the gazette search application.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for gazette operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// RSS feed could not be parsed
    #[error("Feed parse error: {0}")]
    Feed(String),

    /// PDF content could not be loaded or decoded
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Issue-number calculation received a date before the anchor
    #[error("Date {target} precedes the issue anchor {anchor}")]
    DateOrder { target: NaiveDate, anchor: NaiveDate },

    /// No usable keywords were supplied for a search
    #[error("No keywords provided")]
    EmptyKeywords,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure while fetching one gazette source
    #[error("Fetch error for {context}: {message}")]
    Fetch { context: String, message: String },
}

impl AppError {
    /// Create a feed parsing error.
    pub fn feed(message: impl fmt::Display) -> Self {
        Self::Feed(message.to_string())
    }

    /// Create a PDF error.
    pub fn pdf(message: impl fmt::Display) -> Self {
        Self::Pdf(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a fetch error with context.
    pub fn fetch(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            context: context.into(),
            message: message.to_string(),
        }
    }
}
