mod config;
mod dtos;

use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::dynamodb::get_dynamodb_client;
use common::aws_clients::s3::get_s3_client;
use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use config::Config;
use data_pipeline_lambdas::result::error::OrchestrationError;
use data_pipeline_lambdas::{lambda_main, lambda_structure::lambda_trait::Lambda};
use dtos::{LoaderResponse, QueueEvent, QueueMessage, StorageRecord};
use model::object::ObjectLocation;
use model::tabular::TabularPayload;
use repositories::items::items_repository_impl::ItemsRepositoryImpl;
use repositories::items::ItemsRepository;
use repositories::objects::object_repository_impl::ObjectRepositoryImpl;
use repositories::objects::ObjectRepository;
use serde_json::Value;
use std::sync::Arc;

const SAVED_MESSAGE: &str = "Data saved in dynamodb";

pub struct Persisted {
    pub object_repository: Arc<dyn ObjectRepository>,
    pub items_repository: Arc<dyn ItemsRepository>,
}

pub struct ObjectTableLoader;

#[async_trait]
impl Lambda for ObjectTableLoader {
    type PersistedMemory = Persisted;
    // Decoded inside `run` so that a malformed event also ends in a failure response.
    type InputBody = Value;
    type Output = LoaderResponse;
    type Error = OrchestrationError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let config = ConfigLoader::load_default::<Config>()?;
        let aws_client_config = ConfigLoader::load_default::<AwsClientConfig>()?;

        let s3_client = get_s3_client(&aws_client_config).map_err(|e| {
            OrchestrationError::from(anyhow!(e).context("unable to build the S3 client"))
        })?;
        let dynamodb_client = get_dynamodb_client(&aws_client_config).map_err(|e| {
            OrchestrationError::from(anyhow!(e).context("unable to build the DynamoDB client"))
        })?;

        Ok(Persisted {
            object_repository: Arc::new(ObjectRepositoryImpl::new(s3_client)),
            items_repository: Arc::new(ItemsRepositoryImpl::new(
                config.table_name,
                dynamodb_client,
            )),
        })
    }

    async fn run(
        request: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let response = match load_object_rows(request, state).await {
            Ok(written) => {
                tracing::info!(written, "Saved {written} items");
                LoaderResponse {
                    success: true,
                    message: SAVED_MESSAGE.to_owned(),
                }
            }
            Err(e) => {
                tracing::error!(error = ?e, "Exception found: {e}");
                LoaderResponse {
                    success: false,
                    message: e.to_string(),
                }
            }
        };

        Ok(response)
    }
}

async fn load_object_rows(
    request: Value,
    state: &Persisted,
) -> Result<usize, OrchestrationError> {
    let location = extract_object_location(request)?;
    tracing::info!(object = %location, "Loading object");

    let content = state.object_repository.get_object(&location).await?;
    let payload = TabularPayload::from_csv(&content)?;
    tracing::info!(
        object = %location,
        rows = payload.len(),
        columns = ?payload.columns(),
        "Object parsed"
    );

    Ok(state.items_repository.put_items(payload.into_rows()).await?)
}

/// Unwraps queue message, topic envelope and storage notification down to the
/// created object. Only the first record of each level is read, the rest are
/// not decoded.
fn extract_object_location(request: Value) -> Result<ObjectLocation, OrchestrationError> {
    let event: QueueEvent = serde_json::from_value(request)?;

    let message = event.records.into_iter().next().ok_or_else(|| {
        OrchestrationError::Validation("queue event does not contain any record".to_owned())
    })?;
    let message: QueueMessage = serde_json::from_value(message)?;

    let record = message
        .body
        .message
        .records
        .into_iter()
        .next()
        .ok_or_else(|| {
            OrchestrationError::Validation(
                "storage notification does not contain any record".to_owned(),
            )
        })?;
    let record: StorageRecord = serde_json::from_value(record)?;

    Ok(ObjectLocation::new(record.s3.bucket.name, record.s3.object.key))
}

lambda_main!(ObjectTableLoader);
