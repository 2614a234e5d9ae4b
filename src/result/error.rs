//! OrchestrationError is the error every lambda in this crate can fail with. Errors raised by
//! the repositories, the webhook client, the configuration loader and the event decoding are all
//! mapped to one of its three kinds.

use crate::webhook::WebhookClientError;
use common::config::ConfigError;
use lambda_runtime::Error as LambdaRuntimeError;
use model::tabular::TabularError;
use repositories::items::ItemsRepositoryError;
use repositories::objects::ObjectRepositoryError;
use serde_json::error::Category;

pub type Result<T> = std::result::Result<T, OrchestrationError>;
pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    /// The event does not have the expected shape.
    #[error("{0}")]
    Validation(String),
    /// JSON or tabular content could not be parsed.
    #[error("{0}")]
    Parse(String),
    /// A downstream call failed.
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
}

impl From<anyhow::Error> for OrchestrationError {
    fn from(e: anyhow::Error) -> Self {
        Self::Unknown(e)
    }
}

impl From<serde_json::Error> for OrchestrationError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => Self::Validation(e.to_string()),
            Category::Syntax | Category::Eof => Self::Parse(e.to_string()),
            Category::Io => Self::Unknown(e.into()),
        }
    }
}

impl From<TabularError> for OrchestrationError {
    fn from(e: TabularError) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<ConfigError> for OrchestrationError {
    fn from(e: ConfigError) -> Self {
        Self::Unknown(e.into())
    }
}

impl From<ObjectRepositoryError> for OrchestrationError {
    fn from(e: ObjectRepositoryError) -> Self {
        match e {
            ObjectRepositoryError::Unknown(e) => Self::Unknown(e),
            ObjectRepositoryError::ObjectNotFound(message) => {
                Self::Unknown(anyhow::anyhow!(message))
            }
        }
    }
}

impl From<ItemsRepositoryError> for OrchestrationError {
    fn from(e: ItemsRepositoryError) -> Self {
        match e {
            ItemsRepositoryError::Unknown(e) => Self::Unknown(e),
            e @ ItemsRepositoryError::Unprocessed(_) => Self::Unknown(e.into()),
        }
    }
}

impl From<WebhookClientError> for OrchestrationError {
    fn from(e: WebhookClientError) -> Self {
        match e {
            WebhookClientError::Unknown(e) => Self::Unknown(e),
            e @ WebhookClientError::UnexpectedStatus { .. } => Self::Unknown(e.into()),
        }
    }
}
