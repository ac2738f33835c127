use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::types::{BatchUpdateRequest, Document, Location, Range, UpdateRequest};
use crate::config::{DocsConfig, RequestConfig};
use crate::error::{DocsError, DocsResult};

/// Client for the document storage service
#[derive(Clone)]
pub struct DocsClient {
    client: Client,
    base_url: String,
    access_token: String,
    timeout_ms: u64,
}

impl DocsClient {
    /// Create a new document storage client
    pub fn new(config: &DocsConfig, request_config: RequestConfig) -> DocsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(DocsError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            timeout_ms: request_config.timeout_ms,
        })
    }

    /// Fetch a document's full content structure
    pub async fn get_document(&self, doc_id: &str) -> DocsResult<Document> {
        let url = format!("{}/v1/documents/{}", self.base_url, doc_id);

        debug!(doc_id, "Fetching document");

        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(DocsError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let document: Document = response
            .json()
            .await
            .map_err(|e| DocsError::InvalidResponse {
                message: format!("Failed to parse document: {}", e),
            })?;

        info!(
            doc_id,
            latency_ms = start.elapsed().as_millis() as u64,
            "Document fetched"
        );

        Ok(document)
    }

    /// Apply an ordered list of update operations in one atomic call
    pub async fn batch_update(
        &self,
        doc_id: &str,
        requests: Vec<UpdateRequest>,
    ) -> DocsResult<()> {
        let url = format!("{}/v1/documents/{}:batchUpdate", self.base_url, doc_id);

        debug!(doc_id, operations = requests.len(), "Applying batch update");

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Content-Type", "application/json")
            .json(&BatchUpdateRequest { requests })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(DocsError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        info!(
            doc_id,
            latency_ms = start.elapsed().as_millis() as u64,
            "Batch update applied"
        );

        Ok(())
    }

    /// Flattened plain text of a document
    pub async fn fetch_text(&self, doc_id: &str) -> DocsResult<String> {
        let document = self.get_document(doc_id).await?;
        Ok(document.flatten_text())
    }

    /// Replace the entire body of a document with `new_text`.
    ///
    /// Reads the document once to find the current body extent, then deletes
    /// the old content and inserts the replacement in a single batched call,
    /// so a concurrent edit cannot shift indices between the two operations.
    /// The service's mandatory trailing newline is left in place. When the
    /// document is already empty and `new_text` is empty, no call is issued.
    pub async fn replace_text(&self, doc_id: &str, new_text: &str) -> DocsResult<()> {
        let document = self.get_document(doc_id).await?;

        // the trailing structural character must never be deleted
        let end_index = document.end_index().saturating_sub(1);

        let mut requests = Vec::new();

        // a brand-new empty document has end_index == 1
        if end_index > 1 {
            requests.push(UpdateRequest::DeleteContentRange {
                range: Range {
                    start_index: 1,
                    end_index,
                },
            });
        }

        if !new_text.is_empty() {
            requests.push(UpdateRequest::InsertText {
                location: Location { index: 1 },
                text: new_text.to_string(),
            });
        }

        if requests.is_empty() {
            debug!(doc_id, "Document and replacement both empty, nothing to write");
            return Ok(());
        }

        self.batch_update(doc_id, requests).await
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(&self, e: reqwest::Error) -> DocsError {
        if e.is_timeout() {
            DocsError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            DocsError::Http(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = DocsConfig {
            access_token: "test_token".to_string(),
            base_url: "https://docs.googleapis.com".to_string(),
        };

        let client = DocsClient::new(&config, RequestConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = DocsConfig {
            access_token: "test_token".to_string(),
            base_url: "https://docs.googleapis.com/".to_string(),
        };

        let client = DocsClient::new(&config, RequestConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://docs.googleapis.com");
    }
}
