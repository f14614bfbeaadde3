//! Runtime configuration for the docai pipeline.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identity of a hosted document processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Cloud project that owns the processor.
    pub project_id: String,

    /// Region the processor is deployed in (e.g. "us" or "eu").
    pub location: String,

    /// Processor identifier.
    pub processor_id: String,
}

impl ProcessorConfig {
    /// Full resource name used to address the processor.
    pub fn resource_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/processors/{}",
            self.project_id, self.location, self.processor_id
        )
    }

    /// Regional API endpoint serving this processor.
    pub fn endpoint(&self) -> String {
        format!("https://{}-documentai.googleapis.com", self.location)
    }
}

/// Complete runtime configuration, assembled and validated before any
/// document is touched.
#[derive(Debug, Clone)]
pub struct DocAiConfig {
    /// Root folder scanned for PDF invoices.
    pub input_folder: PathBuf,

    /// Processor identity.
    pub processor: ProcessorConfig,

    /// Bearer token presented to the processor API.
    pub access_token: String,
}

impl DocAiConfig {
    /// Build the configuration from environment variables.
    ///
    /// All five variables are required; the first missing one aborts the run
    /// before any processing starts.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::Missing(name)),
            }
        };

        Ok(Self {
            input_folder: PathBuf::from(require("INPUT_FOLDER")?),
            processor: ProcessorConfig {
                project_id: require("PROJECT_ID")?,
                location: require("LOCATION")?,
                processor_id: require("PROCESSOR_ID")?,
            },
            access_token: require("DOCAI_ACCESS_TOKEN")?,
        })
    }
}
