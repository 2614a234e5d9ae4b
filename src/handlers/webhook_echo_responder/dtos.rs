use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Proxy integration request. Only the raw body is used.
#[derive(Deserialize, Debug)]
pub struct WebhookRequest {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl EchoResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers: HashMap::from([(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned())]),
            body,
        }
    }
}
