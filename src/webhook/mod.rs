pub mod webhook_client_impl;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum WebhookClientError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("webhook responded with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

/// Outbound HTTP endpoint receiving JSON documents.
#[async_trait]
pub trait WebhookClient
where
    Self: Sync + Send,
{
    /// Posts `body` as JSON and returns the JSON the endpoint answered with.
    async fn post_json(&self, body: Value) -> Result<Value, WebhookClientError>;
}
