use crate::items::{ItemsRepository, ItemsRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use model::tabular::Row;
use rusoto_dynamodb::{AttributeValue, BatchWriteItemInput, DynamoDb, PutRequest, WriteRequest};
use std::collections::HashMap;
use std::time::Duration;

/// Max number of put requests accepted by a single `BatchWriteItem` call.
const BATCH_WRITE_LIMIT: usize = 25;
/// Calls made for one chunk, the first one included, while the table keeps
/// returning unprocessed items.
const MAX_BATCH_WRITE_ATTEMPTS: u32 = 10;
const RESUBMIT_BACKOFF: Duration = Duration::from_millis(10);

pub struct ItemsRepositoryImpl<T: DynamoDb + Sync + Send> {
    table_name: String,
    dynamodb_client: T,
}

impl<T: DynamoDb + Sync + Send> ItemsRepositoryImpl<T> {
    pub fn new(table_name: String, dynamodb_client: T) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }

    fn build_put_requests(&self, rows: &[Row]) -> Result<Vec<WriteRequest>, ItemsRepositoryError> {
        rows.iter()
            .map(|row| {
                let item: HashMap<String, AttributeValue> =
                    serde_dynamo::to_item(row).map_err(|e| {
                        ItemsRepositoryError::Unknown(
                            anyhow!(e).context("Error serializing row into an item"),
                        )
                    })?;

                Ok(WriteRequest {
                    put_request: Some(PutRequest { item }),
                    ..WriteRequest::default()
                })
            })
            .collect()
    }

    /// Sends one chunk and resubmits whatever the table reports as unprocessed
    /// until nothing is left.
    async fn write_chunk(&self, requests: Vec<WriteRequest>) -> Result<(), ItemsRepositoryError> {
        let mut request_items = HashMap::from([(self.table_name.clone(), requests)]);
        let mut attempt = 1;

        loop {
            let output = self
                .dynamodb_client
                .batch_write_item(BatchWriteItemInput {
                    request_items,
                    ..BatchWriteItemInput::default()
                })
                .await
                .map_err(|e| {
                    ItemsRepositoryError::Unknown(
                        anyhow!(e).context(format!("Error writing items into {}", self.table_name)),
                    )
                })?;

            request_items = output
                .unprocessed_items
                .unwrap_or_default()
                .into_iter()
                .filter(|(_, requests)| !requests.is_empty())
                .collect();

            let unprocessed: usize = request_items.values().map(Vec::len).sum();
            if unprocessed == 0 {
                return Ok(());
            }
            if attempt >= MAX_BATCH_WRITE_ATTEMPTS {
                return Err(ItemsRepositoryError::Unprocessed(unprocessed));
            }

            tracing::warn!(
                table = %self.table_name,
                unprocessed,
                attempt,
                "Resubmitting unprocessed items"
            );
            tokio::time::sleep(RESUBMIT_BACKOFF * attempt).await;
            attempt += 1;
        }
    }
}

#[async_trait]
impl<T: DynamoDb + Sync + Send> ItemsRepository for ItemsRepositoryImpl<T> {
    async fn put_items(&self, rows: Vec<Row>) -> Result<usize, ItemsRepositoryError> {
        let requests = self.build_put_requests(&rows)?;
        let mut written = 0;

        for chunk in requests.chunks(BATCH_WRITE_LIMIT) {
            self.write_chunk(chunk.to_vec()).await?;
            written += chunk.len();
        }

        tracing::info!(table = %self.table_name, written, "Items written");

        Ok(written)
    }
}
