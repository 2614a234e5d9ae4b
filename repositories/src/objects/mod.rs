use async_trait::async_trait;
use model::object::ObjectLocation;

pub mod object_repository_impl;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum ObjectRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    ObjectNotFound(String),
}

/// Read access to object storage.
#[async_trait]
pub trait ObjectRepository
where
    Self: Sync + Send,
{
    /// Returns the whole content of the object.
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, ObjectRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub ObjectRepository {}
    #[async_trait]
    impl ObjectRepository for ObjectRepository {
        async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, ObjectRepositoryError>;
    }
}
