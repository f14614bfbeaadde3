//! Recursive folder processing with a mirrored output structure.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::api::DocumentService;
use crate::error::{BatchError, ExtractError};
use crate::extract::{DocumentArtifacts, DocumentExtractor};

/// A document that failed to process.
#[derive(Debug)]
pub struct FailedDocument {
    /// Path of the input PDF.
    pub path: PathBuf,

    /// What went wrong.
    pub error: ExtractError,
}

/// Tally of a completed batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Artifacts for every successfully processed document.
    pub processed: Vec<DocumentArtifacts>,

    /// Documents whose processing failed.
    pub failed: Vec<FailedDocument>,
}

/// Applies a [`DocumentExtractor`] to every PDF under an input folder,
/// mirroring the input's subfolder structure under a processor-scoped
/// output root.
pub struct FolderBatchRunner<S> {
    input_folder: PathBuf,
    extractor: DocumentExtractor<S>,
}

impl<S: DocumentService> FolderBatchRunner<S> {
    /// Create a runner over `input_folder`.
    pub fn new(input_folder: impl Into<PathBuf>, extractor: DocumentExtractor<S>) -> Self {
        Self {
            input_folder: input_folder.into(),
            extractor,
        }
    }

    /// Output root for this run: `{input}/{basename(input)}_{processorId}`.
    pub fn output_root(&self) -> PathBuf {
        let base = self
            .input_folder
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        self.input_folder
            .join(format!("{}_{}", base, self.extractor.processor_id()))
    }

    /// Walk the input tree and process every PDF into its mirrored
    /// directory.
    ///
    /// The output root lives inside the input folder, so the walk skips it
    /// and everything under it; repeated runs never re-ingest their own
    /// output. Failures on individual documents are logged and collected in
    /// the outcome; only a missing input folder or an uncreatable output
    /// root aborts the run.
    pub async fn run(&self) -> Result<BatchOutcome, BatchError> {
        if !self.input_folder.is_dir() {
            return Err(BatchError::InputFolder(self.input_folder.clone()));
        }

        let output_root = self.output_root();
        fs::create_dir_all(&output_root).map_err(|source| BatchError::OutputRoot {
            path: output_root.clone(),
            source,
        })?;
        info!("output root: {}", output_root.display());

        let mut outcome = BatchOutcome::default();
        let walker = WalkDir::new(&self.input_folder)
            .into_iter()
            .filter_entry(|entry| !entry.path().starts_with(&output_root));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!("failed to read directory entry: {}", e);
                    continue;
                }
            };

            let Ok(relative) = entry.path().strip_prefix(&self.input_folder) else {
                continue;
            };
            let mirrored = output_root.join(relative);

            if entry.file_type().is_dir() {
                if let Err(e) = fs::create_dir_all(&mirrored) {
                    error!("failed to mirror {}: {}", entry.path().display(), e);
                }
                continue;
            }

            if !is_pdf(entry.path()) {
                continue;
            }

            // The mirrored parent exists by now: directories are yielded
            // before their contents.
            let target = mirrored.parent().map(Path::to_path_buf).unwrap_or_else(|| output_root.clone());
            debug!("processing {} -> {}", entry.path().display(), target.display());

            match self.extractor.process(entry.path(), &target).await {
                Ok(artifacts) => {
                    info!("processed {}", entry.path().display());
                    outcome.processed.push(artifacts);
                }
                Err(e) => {
                    error!("failed to process {}: {}", entry.path().display(), e);
                    outcome.failed.push(FailedDocument {
                        path: entry.path().to_path_buf(),
                        error: e,
                    });
                }
            }
        }

        Ok(outcome)
    }
}

/// Case-sensitive match on the literal `.pdf` suffix.
fn is_pdf(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".pdf"))
}
