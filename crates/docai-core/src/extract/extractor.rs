//! Single-document extraction against a hosted processor.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::api::{DocumentService, ProcessRequest};
use crate::error::{ExtractError, ReportError};
use crate::models::entity::{DEFAULT_LOW_CONFIDENCE_THRESHOLD, EntityReport};

/// Saved processor document rendition.
pub const DOCUMENT_FILE: &str = "output.pdf";

/// Full entity report.
pub const REPORT_FILE: &str = "output.csv";

/// Subset of the entity report below the confidence threshold.
pub const LOW_CONFIDENCE_FILE: &str = "low_confidence_scores.csv";

/// Paths of the artifacts produced for one document.
#[derive(Debug, Clone)]
pub struct DocumentArtifacts {
    /// Per-document output directory, named `{stem}_{processorId}`.
    pub output_dir: PathBuf,

    /// Saved document rendition (`output.pdf`).
    pub document: PathBuf,

    /// Full entity report (`output.csv`).
    pub report: PathBuf,

    /// Low-confidence subset (`low_confidence_scores.csv`), written even
    /// when empty.
    pub low_confidence: PathBuf,
}

/// Processes one PDF through a document-understanding service and writes
/// the entity reports next to the returned document rendition.
pub struct DocumentExtractor<S> {
    service: S,
    processor_id: String,
    threshold: f32,
}

impl<S: DocumentService> DocumentExtractor<S> {
    /// Create an extractor for the given service and processor identity.
    pub fn new(service: S, processor_id: impl Into<String>) -> Self {
        Self {
            service,
            processor_id: processor_id.into(),
            threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
        }
    }

    /// Override the low-confidence threshold (percent, default 50.0).
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Processor identity used to derive per-document directory names.
    pub fn processor_id(&self) -> &str {
        &self.processor_id
    }

    /// Process a single PDF and write its artifacts under `output_dir`.
    ///
    /// On success exactly three files exist in the derived per-document
    /// directory. Entity row order matches the processor's answer.
    pub async fn process(
        &self,
        pdf_path: &Path,
        output_dir: &Path,
    ) -> Result<DocumentArtifacts, ExtractError> {
        if !pdf_path.is_file() {
            return Err(ExtractError::MissingFile(pdf_path.to_path_buf()));
        }

        let content = fs::read(pdf_path)?;
        debug!("submitting {} ({} bytes)", pdf_path.display(), content.len());

        let document = self.service.process(&ProcessRequest::pdf(content)).await?;

        let stem = pdf_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        let doc_dir = output_dir.join(format!("{}_{}", stem, self.processor_id));
        fs::create_dir_all(&doc_dir)?;

        let document_path = doc_dir.join(DOCUMENT_FILE);
        fs::write(&document_path, &document.content)?;

        let report = EntityReport::from_document(&document);
        let report_path = doc_dir.join(REPORT_FILE);
        report.write_csv(&report_path)?;
        debug!("wrote {} rows to {}", report.len(), report_path.display());

        // A filter failure never rolls back the reports already on disk.
        let low_confidence_path = doc_dir.join(LOW_CONFIDENCE_FILE);
        if let Err(e) = self.filter_low_confidence(&report, &doc_dir) {
            warn!(
                "failed to write low-confidence report for {}: {}",
                pdf_path.display(),
                e
            );
        }

        Ok(DocumentArtifacts {
            output_dir: doc_dir,
            document: document_path,
            report: report_path,
            low_confidence: low_confidence_path,
        })
    }

    /// Write the subset of `report` below the configured threshold into
    /// `output_dir`, keeping row order. The file is written even when the
    /// subset is empty.
    pub fn filter_low_confidence(
        &self,
        report: &EntityReport,
        output_dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        let path = output_dir.join(LOW_CONFIDENCE_FILE);
        report.below_threshold(self.threshold).write_csv(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::api::{ProcessedDocument, RemoteEntity, Result as ApiResult};
    use crate::error::ApiError;

    use super::*;

    /// Service double returning a canned answer, or failing.
    struct MockService {
        response: std::result::Result<ProcessedDocument, ()>,
    }

    impl MockService {
        fn with_entities(confidences: &[f32]) -> Self {
            let entities = confidences
                .iter()
                .enumerate()
                .map(|(i, &confidence)| RemoteEntity {
                    entity_type: format!("field_{i}"),
                    mention_text: format!("value {i}"),
                    confidence,
                })
                .collect();
            Self {
                response: Ok(ProcessedDocument {
                    content: b"processed-pdf".to_vec(),
                    entities,
                }),
            }
        }

        fn failing() -> Self {
            Self { response: Err(()) }
        }
    }

    impl DocumentService for MockService {
        async fn process(&self, _request: &ProcessRequest) -> ApiResult<ProcessedDocument> {
            match &self.response {
                Ok(document) => Ok(document.clone()),
                Err(()) => Err(ApiError::Status {
                    status: 503,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    fn write_pdf(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"%PDF-1.4 test").unwrap();
        path
    }

    #[tokio::test]
    async fn test_process_writes_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = write_pdf(dir.path(), "invoice.pdf");
        let extractor =
            DocumentExtractor::new(MockService::with_entities(&[0.91, 0.30, 0.55]), "p1");

        let artifacts = extractor.process(&pdf, dir.path()).await.unwrap();

        assert_eq!(artifacts.output_dir, dir.path().join("invoice_p1"));
        assert!(artifacts.document.is_file());
        assert!(artifacts.report.is_file());
        assert!(artifacts.low_confidence.is_file());
        assert_eq!(fs::read(&artifacts.document).unwrap(), b"processed-pdf");

        // Three entities -> header plus three rows, in processor order.
        let report = fs::read_to_string(&artifacts.report).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Type,Value,Confidence");
        assert_eq!(lines[1], "field_0,value 0,91.00");
        assert_eq!(lines[2], "field_1,value 1,30.00");
        assert_eq!(lines[3], "field_2,value 2,55.00");

        // Only the 0.30 entity falls below the default threshold.
        let low = fs::read_to_string(&artifacts.low_confidence).unwrap();
        let lines: Vec<&str> = low.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "field_1,value 1,30.00");
    }

    #[tokio::test]
    async fn test_low_confidence_file_written_even_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = write_pdf(dir.path(), "invoice.pdf");
        let extractor = DocumentExtractor::new(MockService::with_entities(&[0.91, 0.88]), "p1");

        let artifacts = extractor.process(&pdf, dir.path()).await.unwrap();

        let low = fs::read_to_string(&artifacts.low_confidence).unwrap();
        assert_eq!(low.trim_end(), "Type,Value,Confidence");
    }

    #[tokio::test]
    async fn test_custom_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = write_pdf(dir.path(), "invoice.pdf");
        let extractor = DocumentExtractor::new(MockService::with_entities(&[0.91, 0.30]), "p1")
            .with_threshold(95.0);

        let artifacts = extractor.process(&pdf, dir.path()).await.unwrap();

        let low = fs::read_to_string(&artifacts.low_confidence).unwrap();
        assert_eq!(low.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_yields_no_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.pdf");
        let extractor = DocumentExtractor::new(MockService::with_entities(&[0.91]), "p1");

        let err = extractor.process(&missing, dir.path()).await.unwrap_err();
        assert!(matches!(err, ExtractError::MissingFile(_)));
        assert!(!dir.path().join("absent_p1").exists());
    }

    #[tokio::test]
    async fn test_service_error_yields_no_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = write_pdf(dir.path(), "invoice.pdf");
        let extractor = DocumentExtractor::new(MockService::failing(), "p1");

        let err = extractor.process(&pdf, dir.path()).await.unwrap_err();
        assert!(matches!(err, ExtractError::Service(_)));
        assert!(!dir.path().join("invoice_p1").exists());
    }
}
