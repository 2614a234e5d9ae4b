use common::deserializers::json_from_string::deserialize_json_string;
use common::deserializers::url_encoded::deserialize_url_encoded;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Queue event delivering topic notifications. Records are kept raw so only the
/// one being processed has to match [`QueueMessage`].
#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct QueueEvent {
    pub records: Vec<Value>,
}

#[derive(Deserialize, Debug)]
pub struct QueueMessage {
    #[serde(deserialize_with = "deserialize_json_string")]
    pub body: TopicNotification,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct TopicNotification {
    #[serde(deserialize_with = "deserialize_json_string")]
    pub message: StorageNotification,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct StorageNotification {
    pub records: Vec<Value>,
}

#[derive(Deserialize, Debug)]
pub struct StorageRecord {
    pub s3: StorageEntity,
}

#[derive(Deserialize, Debug)]
pub struct StorageEntity {
    pub bucket: StorageBucket,
    pub object: StorageObject,
}

#[derive(Deserialize, Debug)]
pub struct StorageBucket {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct StorageObject {
    #[serde(deserialize_with = "deserialize_url_encoded")]
    pub key: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct LoaderResponse {
    pub success: bool,
    pub message: String,
}
