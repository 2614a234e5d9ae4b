use async_trait::async_trait;
use model::tabular::Row;

pub mod items_repository_impl;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum ItemsRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0} items were not processed by the table")]
    Unprocessed(usize),
}

/// Write access to the table rows are persisted into.
#[async_trait]
pub trait ItemsRepository
where
    Self: Sync + Send,
{
    /// Stores every row as one item through batch writes and returns how many
    /// items were written.
    async fn put_items(&self, rows: Vec<Row>) -> Result<usize, ItemsRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub ItemsRepository {}
    #[async_trait]
    impl ItemsRepository for ItemsRepository {
        async fn put_items(&self, rows: Vec<Row>) -> Result<usize, ItemsRepositoryError>;
    }
}
