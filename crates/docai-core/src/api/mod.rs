//! Remote document-understanding service boundary.

mod client;

pub use client::DocAiClient;

use std::future::Future;

use crate::error::ApiError;

/// MIME type submitted for PDF inputs.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// A single document submission. Immutable, constructed per call.
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    /// Raw document bytes.
    pub content: Vec<u8>,

    /// MIME type of the payload.
    pub mime_type: &'static str,
}

impl ProcessRequest {
    /// Build a request for a PDF payload.
    pub fn pdf(content: Vec<u8>) -> Self {
        Self {
            content,
            mime_type: PDF_MIME_TYPE,
        }
    }
}

/// An entity as the processor returned it, confidence still in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteEntity {
    /// Type label (e.g. "total_amount").
    pub entity_type: String,

    /// Text the entity was anchored to.
    pub mention_text: String,

    /// Confidence score in [0, 1].
    pub confidence: f32,
}

/// The processor's answer for one document.
#[derive(Debug, Clone, Default)]
pub struct ProcessedDocument {
    /// Raw bytes of the returned document rendition.
    pub content: Vec<u8>,

    /// Entities in the order the processor emitted them.
    pub entities: Vec<RemoteEntity>,
}

/// Trait for document-understanding service implementations.
pub trait DocumentService {
    /// Submit one document and wait for the processed result.
    fn process(
        &self,
        request: &ProcessRequest,
    ) -> impl Future<Output = Result<ProcessedDocument>> + Send;
}
