use crate::fixtures::webhook::{webhook_fixture, WebhookFixture, WEBHOOK_PATH};
use crate::helpers::lambda::{build_event, RelayLambda, RelayRequest, RelayResponse, RelayState};
use data_pipeline_lambdas::lambda_structure::lambda_trait::Lambda;
use data_pipeline_lambdas::result::error::OrchestrationError;
use data_pipeline_lambdas::webhook::webhook_client_impl::WebhookClientImpl;
use rstest::*;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn build_state(fixture: &WebhookFixture) -> RelayState {
    RelayState {
        webhook_client: Arc::new(WebhookClientImpl::new(fixture.url())),
    }
}

#[rstest]
#[tokio::test]
async fn service_posts_items_to_webhook(#[future] webhook_fixture: WebhookFixture) {
    let fixture = webhook_fixture.await;
    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .and(body_json(json!([{ "id": { "S": "1" } }, { "id": { "S": "2" } }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "received": 2 })))
        .expect(1)
        .mount(&fixture.mock_server)
        .await;

    let request = RelayRequest {
        items: vec![json!({ "id": { "S": "1" } }), json!({ "id": { "S": "2" } })],
    };
    let response = RelayLambda::service(build_event(request), &build_state(&fixture))
        .await
        .unwrap();

    assert_eq!(
        RelayResponse {
            forwarded: 2,
            answer: json!({ "received": 2 })
        },
        response
    );
}

#[rstest]
#[tokio::test]
async fn service_propagates_webhook_status(#[future] webhook_fixture: WebhookFixture) {
    let fixture = webhook_fixture.await;
    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&fixture.mock_server)
        .await;

    let request = RelayRequest {
        items: vec![json!({ "id": { "S": "1" } })],
    };
    let error = RelayLambda::service(build_event(request), &build_state(&fixture))
        .await
        .unwrap_err();

    assert!(matches!(error, OrchestrationError::Unknown(_)));
    assert!(error.to_string().contains("503"));
}

#[rstest]
#[tokio::test]
async fn service_propagates_run_errors(#[future] webhook_fixture: WebhookFixture) {
    let fixture = webhook_fixture.await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fixture.mock_server)
        .await;

    let error = RelayLambda::service(
        build_event(RelayRequest { items: vec![] }),
        &build_state(&fixture),
    )
    .await
    .unwrap_err();

    assert!(matches!(error, OrchestrationError::Validation(_)));
}

#[test]
fn lambda_error_converts_into_runtime_error() {
    let error: lambda_runtime::Error =
        OrchestrationError::Parse("expected value at line 1 column 1".to_owned()).into();

    assert_eq!("expected value at line 1 column 1", error.to_string());
}
