//! Batch processing of invoice folders.

mod runner;

pub use runner::{BatchOutcome, FailedDocument, FolderBatchRunner};
