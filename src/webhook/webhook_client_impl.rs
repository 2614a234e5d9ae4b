use super::{WebhookClient, WebhookClientError};
use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;

pub struct WebhookClientImpl {
    url: String,
    http_client: reqwest::Client,
}

impl WebhookClientImpl {
    pub fn new(url: String) -> Self {
        Self::new_with_client(url, reqwest::Client::new())
    }

    pub fn new_with_client(url: String, http_client: reqwest::Client) -> Self {
        Self { url, http_client }
    }
}

#[async_trait]
impl WebhookClient for WebhookClientImpl {
    async fn post_json(&self, body: Value) -> Result<Value, WebhookClientError> {
        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                WebhookClientError::Unknown(
                    anyhow!(e).context(format!("Error sending request to {}", self.url)),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookClientError::UnexpectedStatus { status, body });
        }

        response.json::<Value>().await.map_err(|e| {
            WebhookClientError::Unknown(
                anyhow!(e).context(format!("Response from {} is not valid json", self.url)),
            )
        })
    }
}
