use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct DynamoDbStreamEvent {
    pub records: Vec<DynamoDbStreamEventData>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DynamoDbStreamEventData {
    pub event_name: StreamEventName,
    pub dynamodb: Option<DynamoDbEvent>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all(deserialize = "SCREAMING_SNAKE_CASE"))]
pub enum StreamEventName {
    Insert,
    Modify,
    Remove,
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct DynamoDbEvent {
    /// Attribute values in DynamoDB JSON, forwarded untouched.
    pub new_image: Option<Map<String, Value>>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ForwarderResponse {
    pub message: String,
}
