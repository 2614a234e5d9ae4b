mod dtos;

use async_trait::async_trait;
use common::serializers::spaced_json;
use data_pipeline_lambdas::result::error::OrchestrationError;
use data_pipeline_lambdas::{lambda_main, lambda_structure::lambda_trait::Lambda};
use dtos::{EchoResponse, WebhookRequest};
use serde_json::Value;

pub struct WebhookEchoResponder;

#[async_trait]
impl Lambda for WebhookEchoResponder {
    type PersistedMemory = ();
    type InputBody = WebhookRequest;
    type Output = EchoResponse;
    type Error = OrchestrationError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        Ok(())
    }

    async fn run(
        request: Self::InputBody,
        _state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let raw_body = request.body.ok_or_else(|| {
            OrchestrationError::Validation("request does not have a body".to_owned())
        })?;

        let body: Value = serde_json::from_str(&raw_body)?;
        tracing::info!(body = %body, "Webhook received");

        let body = spaced_json::to_string(&body)?;

        Ok(EchoResponse::ok(body))
    }
}

lambda_main!(WebhookEchoResponder);

#[cfg(test)]
mod tests {
    use crate::dtos::{EchoResponse, WebhookRequest};
    use crate::WebhookEchoResponder;
    use data_pipeline_lambdas::lambda_structure::lambda_trait::Lambda;
    use data_pipeline_lambdas::result::error::OrchestrationError;
    use rstest::*;
    use serde_json::json;

    async fn run(body: Option<&str>) -> Result<EchoResponse, OrchestrationError> {
        WebhookEchoResponder::run(
            WebhookRequest {
                body: body.map(str::to_owned),
            },
            &(),
        )
        .await
    }

    #[rstest]
    #[case::object(r#"{"a":1}"#, r#"{"a": 1}"#)]
    #[case::nested(
        r#"{"id":"7","items":[1,2,{"ok":true}],"meta":null}"#,
        r#"{"id": "7", "items": [1, 2, {"ok": true}], "meta": null}"#
    )]
    #[case::key_order_kept(r#"{"z":1,"a":2}"#, r#"{"z": 1, "a": 2}"#)]
    #[case::array(r#"[1, 2]"#, r#"[1, 2]"#)]
    #[case::string(r#""hello""#, r#""hello""#)]
    #[case::empty_object("{}", "{}")]
    #[tokio::test]
    async fn echo_body_ok(#[case] body: &str, #[case] expected: &str) {
        let response = run(Some(body)).await.unwrap();

        assert_eq!(200, response.status_code);
        assert_eq!(
            Some("application/json"),
            response.headers.get("Content-Type").map(String::as_str)
        );
        assert_eq!(expected, response.body);
    }

    #[tokio::test]
    async fn echo_response_shape() {
        let response = run(Some(r#"{"a":1}"#)).await.unwrap();

        assert_eq!(
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{\"a\": 1}"
            }),
            serde_json::to_value(response).unwrap()
        );
    }

    #[rstest]
    #[case::truncated(r#"{"a":"#)]
    #[case::not_json("hello")]
    #[case::empty("")]
    #[tokio::test]
    async fn invalid_body_fails(#[case] body: &str) {
        let error = run(Some(body)).await.unwrap_err();

        assert!(matches!(error, OrchestrationError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_body_fails() {
        let error = run(None).await.unwrap_err();

        assert!(matches!(error, OrchestrationError::Validation(_)));
    }
}
