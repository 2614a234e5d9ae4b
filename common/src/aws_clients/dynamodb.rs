use crate::config::aws_client_config::AwsClientConfig;
use rusoto_core::region::ParseRegionError;
use rusoto_dynamodb::DynamoDbClient;

pub fn get_dynamodb_client(config: &AwsClientConfig) -> Result<DynamoDbClient, ParseRegionError> {
    Ok(DynamoDbClient::new(config.region()?))
}
