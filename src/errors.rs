//! Unified application error type.
//! Every module (models, core, config, cli) returns AppError so errors
//! surface the same way to the library caller and to the CLI host.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid encoding: character {found:?} at slot {index} is not a duty code 1-4")]
    InvalidEncoding { index: usize, found: char },

    #[error("Invalid duty status: {0}")]
    InvalidDuty(String),

    #[error("Invalid slot range: {0}")]
    InvalidRange(String),

    #[error("Invalid pointer gesture: {0}")]
    InvalidGesture(String),

    // ---------------------------
    // Geometry
    // ---------------------------
    #[error("Invalid drawing surface {width}x{height}: both sides must be positive")]
    InvalidSurface { width: f64, height: f64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
