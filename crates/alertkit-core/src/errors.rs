//! Error types for alertkit.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Errors while building dialog content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("An alert needs at least one action")]
    NoActions,
}

/// Errors while loading a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid color for '{field}': {value}")]
    InvalidColor { field: String, value: String },

    #[error("Malformed theme: {0}")]
    Json(String),
}

/// Errors raised by a presented alert.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("No action at index {index} (alert has {count})")]
    ActionOutOfRange { index: usize, count: usize },

    #[error("The alert has already been dismissed")]
    Dismissed,

    #[error("The alert content is not accepting input")]
    NotInteractive,
}
