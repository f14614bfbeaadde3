//! Document extraction: one PDF in, three on-disk artifacts out.

mod extractor;

pub use extractor::{DOCUMENT_FILE, DocumentArtifacts, DocumentExtractor, LOW_CONFIDENCE_FILE, REPORT_FILE};
