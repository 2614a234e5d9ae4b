use crate::objects::{ObjectRepository, ObjectRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use model::object::ObjectLocation;
use rusoto_core::RusotoError;
use rusoto_s3::{GetObjectError, GetObjectRequest, S3};
use tokio::io::AsyncReadExt;

pub struct ObjectRepositoryImpl<T: S3 + Sync + Send> {
    s3_client: T,
}

impl<T: S3 + Sync + Send> ObjectRepositoryImpl<T> {
    pub fn new(s3_client: T) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl<T: S3 + Sync + Send> ObjectRepository for ObjectRepositoryImpl<T> {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, ObjectRepositoryError> {
        let input = GetObjectRequest {
            bucket: location.bucket.clone(),
            key: location.key.clone(),
            ..GetObjectRequest::default()
        };

        let output = self
            .s3_client
            .get_object(input)
            .await
            .map_err(|e| match e {
                RusotoError::Service(GetObjectError::NoSuchKey(message)) => {
                    ObjectRepositoryError::ObjectNotFound(format!(
                        "Object {location} not found: {message}"
                    ))
                }
                e => ObjectRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error fetching object {location}")),
                ),
            })?;

        let body = output.body.ok_or_else(|| {
            ObjectRepositoryError::Unknown(anyhow!("Object {location} has no body"))
        })?;

        let mut content = Vec::new();
        body.into_async_read()
            .read_to_end(&mut content)
            .await
            .map_err(|e| {
                ObjectRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error reading body of object {location}")),
                )
            })?;

        tracing::info!(object = %location, bytes = content.len(), "Object fetched");

        Ok(content)
    }
}
