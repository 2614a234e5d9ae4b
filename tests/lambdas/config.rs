use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use data_pipeline_lambdas::config::GlobalConfig;
use rusoto_core::Region;
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize, Debug)]
struct LoaderConfig {
    table_name: String,
}

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn global_config_defaults_to_info() {
    let config: GlobalConfig = ConfigLoader::load_from(vars(&[])).unwrap();

    assert_eq!(LevelFilter::INFO, config.level_filter());
}

#[test]
fn handler_config_is_read_from_vars() {
    let config: LoaderConfig =
        ConfigLoader::load_from(vars(&[("TABLE_NAME", "csv-store"), ("REGION", "eu-west-1")]))
            .unwrap();

    assert_eq!("csv-store", config.table_name);
}

#[test]
fn missing_handler_var_is_an_error() {
    let error = ConfigLoader::load_from::<LoaderConfig, _>(vars(&[("REGION", "eu-west-1")]))
        .unwrap_err();

    assert!(error.to_string().contains("table_name"));
}

#[test]
fn aws_region_uses_localstack_endpoint() {
    let config: AwsClientConfig = ConfigLoader::load_from(vars(&[
        ("REGION", "us-west-2"),
        ("LOCALSTACK_TEST_MODE_ENDPOINT", "http://localstack:4566"),
    ]))
    .unwrap();

    assert_eq!(
        Region::Custom {
            name: "us-west-2".to_owned(),
            endpoint: "http://localstack:4566".to_owned(),
        },
        config.region().unwrap()
    );
}
