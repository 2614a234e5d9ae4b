use crate::config::GlobalConfig;
use async_trait::async_trait;
use common::config::ConfigLoader;
use lambda_runtime::{Error, LambdaEvent};
use serde::{de::DeserializeOwned, Serialize};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;

#[async_trait]
pub trait Lambda {
    type PersistedMemory: Sync + Send;
    type InputBody: DeserializeOwned + Send + Sync + std::fmt::Debug;
    type Output: Serialize + Send + Sync;
    type Error: Into<Error> + std::error::Error + Sync + Send + 'static;

    /// This function should be implemented to return any configuration, clients or state that we
    /// want to persist between lambda executions. A failure here stops the lambda at startup.
    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error>;

    /// This function should be implemented with the actual business logic of the lambda.
    async fn run(
        payload: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error>;

    /// A pre-configured main function that will bootstrap an instance of this lambda and start execution. Call this from the top-level main function for a given lambda.
    async fn main() -> Result<(), Error> {
        LogTracer::init()?;
        let global_config = ConfigLoader::load_default::<GlobalConfig>()?;

        let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
        let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
        let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);

        tracing_subscriber::registry()
            .with(global_config.level_filter())
            .with(JsonStorageLayer)
            .with(bunyan_formatting_layer)
            .init();

        // Get a reference to avoid moving the persisted state into the below closure.
        let persisted = &Self::bootstrap().await.map_err(|e| {
            tracing::error!(error = ?e, "Bootstrap failed: {e}");
            e
        })?;

        // Wrap our actual service call so we can pass in our state while preserving the expected Lambda signature.
        let service = move |event: LambdaEvent<Self::InputBody>| async move {
            Self::service(event, persisted).await
        };

        lambda_runtime::run(lambda_runtime::service_fn(service)).await
    }

    /// Service function that is called everytime the lambda executes. Errors returned by `run`
    /// are logged here once and handed to the runtime unchanged.
    async fn service(
        event: LambdaEvent<Self::InputBody>,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let LambdaEvent { payload, context } = event;

        tracing::info!(payload = ?payload, request_id = %context.request_id, "Execution started");

        Self::run(payload, state).await.map_err(|e| {
            tracing::error!(error = ?e, "Execution failed: {e}");
            e
        })
    }
}

#[macro_export]
macro_rules! lambda_main {
    ($lambda: ty) => {
        #[tokio::main]
        async fn main() -> $crate::result::error::LambdaRuntimeResult {
            use $crate::lambda_structure::lambda_trait::Lambda;
            <$lambda>::main().await
        }
    };
}
