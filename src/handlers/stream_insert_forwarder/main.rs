mod config;
mod dtos;

use async_trait::async_trait;
use common::config::ConfigLoader;
use config::Config;
use data_pipeline_lambdas::result::error::OrchestrationError;
use data_pipeline_lambdas::webhook::webhook_client_impl::WebhookClientImpl;
use data_pipeline_lambdas::webhook::WebhookClient;
use data_pipeline_lambdas::{lambda_main, lambda_structure::lambda_trait::Lambda};
use dtos::{DynamoDbStreamEvent, ForwarderResponse, StreamEventName};
use serde_json::{Map, Value};
use std::sync::Arc;

const DONE_MESSAGE: &str = "Done";

pub struct Persisted {
    pub config: Config,
    pub webhook_client: Arc<dyn WebhookClient>,
}

pub struct StreamInsertForwarder;

#[async_trait]
impl Lambda for StreamInsertForwarder {
    type PersistedMemory = Persisted;
    type InputBody = DynamoDbStreamEvent;
    type Output = ForwarderResponse;
    type Error = OrchestrationError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let config = ConfigLoader::load_default::<Config>()?;
        let webhook_client = Arc::new(WebhookClientImpl::new(config.api_url.clone()));

        Ok(Persisted {
            config,
            webhook_client,
        })
    }

    async fn run(
        request: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        tracing::info!(api_url = %state.config.api_url, "Forwarding inserted items");

        let new_items = extract_new_items(request)?;

        if new_items.is_empty() {
            tracing::info!("No new items found");
        } else {
            let count = new_items.len();
            let body = Value::Array(new_items.into_iter().map(Value::Object).collect());
            let response = state.webhook_client.post_json(body).await?;

            tracing::info!(count, response = %response, "Sent {count} items to webhook");
        }

        Ok(ForwarderResponse {
            message: DONE_MESSAGE.to_owned(),
        })
    }
}

/// New images of the inserted records, in stream order.
fn extract_new_items(
    event: DynamoDbStreamEvent,
) -> Result<Vec<Map<String, Value>>, OrchestrationError> {
    event
        .records
        .into_iter()
        .enumerate()
        .filter(|(_, record)| record.event_name == StreamEventName::Insert)
        .map(|(index, record)| {
            record
                .dynamodb
                .and_then(|dynamodb| dynamodb.new_image)
                .ok_or_else(|| {
                    OrchestrationError::Validation(format!(
                        "insert record {index} does not have a NewImage field"
                    ))
                })
        })
        .collect()
}

lambda_main!(StreamInsertForwarder);
