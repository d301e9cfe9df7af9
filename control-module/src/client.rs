use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{service} answered {status}: {message}")]
    Service {
        service: String,
        status: u16,
        message: String,
    },
    #[error("{0} returned no analysis content")]
    MissingContent(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub user_id: String,
    pub book_id: String,
    pub book_title: String,
    pub book_author: String,
    pub genre: String,
    pub reading_content: String,
}

/// Client for one analysis service (either the LLM-backed one or the mock).
#[derive(Clone)]
pub struct ServiceClient {
    client: Client,
    name: String,
    base_url: String,
}

/// Pulls `data.content` out of a generate-analysis envelope.
pub fn extract_content(body: &Value) -> Option<&str> {
    body.get("data")?.get("content")?.as_str()
}

/// Best-effort `message` field of a response envelope.
fn message_of(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message")
        .to_string()
}

impl ServiceClient {
    pub fn new(client: Client, name: &str, base_url: &str) -> Self {
        Self {
            client,
            name: name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn is_healthy(&self) -> bool {
        let url = format!("{}/api/v1/health/", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("{} health check answered {}", self.name, response.status());
                false
            }
            Err(e) => {
                warn!("{} not reachable: {}", self.name, e);
                false
            }
        }
    }

    pub async fn generate_analysis(&self, request: &AnalysisRequest) -> Result<String, ClientError> {
        let url = format!("{}/api/v1/analysis/generate", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(ClientError::Service {
                service: self.name.clone(),
                status: status.as_u16(),
                message: message_of(&body),
            });
        }

        extract_content(&body)
            .map(str::to_string)
            .ok_or_else(|| ClientError::MissingContent(self.name.clone()))
    }

    /// POSTs an admin command and returns the service's confirmation message.
    pub async fn admin(&self, path: &str, query: &[(&str, String)]) -> Result<String, ClientError> {
        let url = format!("{}/api/v1/admin/{}", self.base_url, path);
        let response = self.client.post(&url).query(query).send().await?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        if !status.is_success() {
            return Err(ClientError::Service {
                service: self.name.clone(),
                status: status.as_u16(),
                message: message_of(&body),
            });
        }

        let message = message_of(&body);
        info!("{}: {}", self.name, message);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_content_from_both_envelopes() {
        let llm = json!({ "success": true, "data": { "content": "from llm" }, "error_code": null });
        let mock = json!({ "success": true, "data": { "content": "from mock", "confidence": 0.95 }, "timestamp": 1 });

        assert_eq!(extract_content(&llm), Some("from llm"));
        assert_eq!(extract_content(&mock), Some("from mock"));
    }

    #[test]
    fn missing_content_yields_none() {
        assert_eq!(extract_content(&json!({ "success": false })), None);
        assert_eq!(extract_content(&json!({ "data": { "content": 3 } })), None);
        assert_eq!(extract_content(&Value::Null), None);
    }

    #[test]
    fn message_falls_back() {
        assert_eq!(message_of(&json!({ "message": "nope" })), "nope");
        assert_eq!(message_of(&Value::Null), "no message");
    }

    #[test]
    fn base_url_is_normalised() {
        let client = ServiceClient::new(Client::new(), "mock", "http://localhost:8001/");
        assert_eq!(client.base_url, "http://localhost:8001");
        assert_eq!(client.name(), "mock");
    }
}
