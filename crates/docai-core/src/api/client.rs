//! HTTP client for the hosted document processor.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::models::config::ProcessorConfig;

use super::{DocumentService, ProcessRequest, ProcessedDocument, RemoteEntity, Result};

/// Client for a hosted document processor speaking the JSON REST protocol.
///
/// The regional endpoint and the processor resource name are computed once
/// at construction; the credential travels as a bearer token on every call.
#[derive(Debug, Clone)]
pub struct DocAiClient {
    http: reqwest::Client,
    endpoint: String,
    resource_name: String,
    access_token: String,
}

impl DocAiClient {
    /// Create a client addressing the given processor.
    pub fn new(processor: &ProcessorConfig, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: processor.endpoint(),
            resource_name: processor.resource_name(),
            access_token: access_token.into(),
        }
    }

    fn process_url(&self) -> String {
        format!("{}/v1/{}:process", self.endpoint, self.resource_name)
    }
}

impl DocumentService for DocAiClient {
    async fn process(&self, request: &ProcessRequest) -> Result<ProcessedDocument> {
        let url = self.process_url();
        let body = ProcessDocumentRequest {
            raw_document: RawDocument {
                content: BASE64.encode(&request.content),
                mime_type: request.mime_type,
            },
        };

        debug!("POST {} ({} bytes)", url, request.content.len());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                endpoint: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ProcessDocumentResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        payload
            .document
            .ok_or(ApiError::MissingDocument)?
            .into_document()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessDocumentRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument<'a> {
    content: String,
    mime_type: &'a str,
}

#[derive(Deserialize)]
struct ProcessDocumentResponse {
    document: Option<WireDocument>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDocument {
    /// Base64-encoded document rendition. Absent when the processor elides
    /// the payload; decoded to empty bytes in that case.
    #[serde(default)]
    content: Option<String>,

    #[serde(default)]
    entities: Vec<WireEntity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEntity {
    #[serde(rename = "type")]
    entity_type: String,

    #[serde(default)]
    mention_text: String,

    #[serde(default)]
    confidence: f32,
}

impl WireDocument {
    fn into_document(self) -> Result<ProcessedDocument> {
        let content = match self.content {
            Some(encoded) => BASE64
                .decode(encoded.as_bytes())
                .map_err(|e| ApiError::Decode(format!("document content: {e}")))?,
            None => Vec::new(),
        };

        let entities = self
            .entities
            .into_iter()
            .map(|e| RemoteEntity {
                entity_type: e.entity_type,
                mention_text: e.mention_text,
                confidence: e.confidence,
            })
            .collect();

        Ok(ProcessedDocument { content, entities })
    }
}
