use async_trait::async_trait;
use data_pipeline_lambdas::lambda_structure::lambda_trait::Lambda;
use data_pipeline_lambdas::result::error::OrchestrationError;
use data_pipeline_lambdas::webhook::WebhookClient;
use lambda_runtime::{Context, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Deserialize, Debug)]
pub struct RelayRequest {
    pub items: Vec<Value>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct RelayResponse {
    pub forwarded: usize,
    pub answer: Value,
}

pub struct RelayState {
    pub webhook_client: Arc<dyn WebhookClient>,
}

/// Minimal lambda posting its items to a webhook, used to drive the shared lambda plumbing.
pub struct RelayLambda;

#[async_trait]
impl Lambda for RelayLambda {
    type PersistedMemory = RelayState;
    type InputBody = RelayRequest;
    type Output = RelayResponse;
    type Error = OrchestrationError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        Err(OrchestrationError::Validation(
            "relay lambda is built by the tests".to_owned(),
        ))
    }

    async fn run(
        request: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        if request.items.is_empty() {
            return Err(OrchestrationError::Validation("no items to relay".to_owned()));
        }

        let forwarded = request.items.len();
        let answer = state
            .webhook_client
            .post_json(Value::Array(request.items))
            .await?;

        Ok(RelayResponse { forwarded, answer })
    }
}

pub fn build_event<T>(payload: T) -> LambdaEvent<T> {
    LambdaEvent::new(payload, Context::default())
}
