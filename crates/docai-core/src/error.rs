//! Error types for the docai-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the docai library.
#[derive(Error, Debug)]
pub enum DocAiError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote processor error.
    #[error("processor error: {0}")]
    Api(#[from] ApiError),

    /// Report writing error.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// Single-document processing error.
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Batch run error.
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while assembling the runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Errors from the remote document processor.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP request could not be completed.
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The processor answered with a non-success status.
    #[error("processor returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to decode processor response: {0}")]
    Decode(String),

    /// The response carried no document payload.
    #[error("processor response has no document")]
    MissingDocument,
}

/// Errors while writing CSV reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the report file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors while processing a single document.
///
/// The batch runner contains every variant here; none of them stops a run.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input PDF does not exist or is not a file.
    #[error("file not found: {0}")]
    MissingFile(PathBuf),

    /// The remote call failed.
    #[error("service error: {0}")]
    Service(#[from] ApiError),

    /// A report could not be written.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// Reading the input or writing an artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort an entire batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input folder does not exist or is not a directory.
    #[error("input folder not found: {0}")]
    InputFolder(PathBuf),

    /// The processor output root could not be created.
    #[error("failed to create output root {path}: {source}")]
    OutputRoot {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for the docai library.
pub type Result<T> = std::result::Result<T, DocAiError>;
