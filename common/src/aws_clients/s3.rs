use crate::config::aws_client_config::AwsClientConfig;
use rusoto_core::region::ParseRegionError;
use rusoto_s3::S3Client;

pub fn get_s3_client(config: &AwsClientConfig) -> Result<S3Client, ParseRegionError> {
    Ok(S3Client::new(config.region()?))
}
