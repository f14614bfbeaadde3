//! Entity report models and CSV serialization.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::ProcessedDocument;
use crate::error::ReportError;

/// Default confidence threshold (in percent) below which an extraction is
/// segregated into the low-confidence report.
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// A single extracted key-value entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    /// Type label assigned by the processor (e.g. "total_amount").
    pub entity_type: String,

    /// Mention text the processor anchored the entity to.
    pub value: String,

    /// Extraction confidence as a percentage in [0, 100], rounded to 2
    /// decimals.
    pub confidence: f32,
}

/// Convert a raw [0, 1] confidence into a percentage rounded to 2 decimals.
pub fn confidence_percent(raw: f32) -> f32 {
    (raw * 100.0 * 100.0).round() / 100.0
}

/// An ordered table of extracted entities for one document.
///
/// Row order matches the order the processor returned the entities in;
/// nothing here re-sorts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityReport {
    entities: Vec<ExtractedEntity>,
}

impl EntityReport {
    /// Build a report from already-converted entity rows.
    pub fn from_entities(entities: Vec<ExtractedEntity>) -> Self {
        Self { entities }
    }

    /// Build a report from a processed document, converting confidences to
    /// percentages.
    pub fn from_document(document: &ProcessedDocument) -> Self {
        let entities = document
            .entities
            .iter()
            .map(|e| ExtractedEntity {
                entity_type: e.entity_type.clone(),
                value: e.mention_text.clone(),
                confidence: confidence_percent(e.confidence),
            })
            .collect();
        Self { entities }
    }

    /// Number of rows in the report.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The rows in processor order.
    pub fn entities(&self) -> &[ExtractedEntity] {
        &self.entities
    }

    /// Rows with confidence strictly below `threshold`, original order kept.
    pub fn below_threshold(&self, threshold: f32) -> Self {
        Self {
            entities: self
                .entities
                .iter()
                .filter(|e| e.confidence < threshold)
                .cloned()
                .collect(),
        }
    }

    /// Write the report as CSV with columns `Type,Value,Confidence` and no
    /// index column. Confidence is formatted with two decimals.
    pub fn write_csv(&self, path: &Path) -> Result<(), ReportError> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record(["Type", "Value", "Confidence"])?;
        for entity in &self.entities {
            wtr.write_record([
                entity.entity_type.as_str(),
                entity.value.as_str(),
                &format!("{:.2}", entity.confidence),
            ])?;
        }

        wtr.flush().map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
