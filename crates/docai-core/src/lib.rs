//! Core library for batch invoice processing with hosted document processors.
//!
//! This crate provides:
//! - A client for a hosted document-understanding API (PDF bytes in, typed
//!   entities with confidence scores out)
//! - Per-document CSV entity reports with low-confidence segregation
//! - A folder batch runner that mirrors the input tree under a
//!   processor-scoped output root

pub mod api;
pub mod batch;
pub mod error;
pub mod extract;
pub mod models;

pub use api::{DocAiClient, DocumentService, ProcessRequest, ProcessedDocument, RemoteEntity};
pub use batch::{BatchOutcome, FailedDocument, FolderBatchRunner};
pub use error::{DocAiError, Result};
pub use extract::{DocumentArtifacts, DocumentExtractor};
pub use models::config::{DocAiConfig, ProcessorConfig};
pub use models::entity::{EntityReport, ExtractedEntity};
