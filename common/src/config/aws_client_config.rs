use rusoto_core::region::{ParseRegionError, Region};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Clone, Debug)]
pub struct AwsClientConfig {
    /// AWS region the S3 and DynamoDB clients talk to.
    pub region: String,

    /// Only used for development. LocalStack endpoint
    #[serde(default)]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn region(&self) -> Result<Region, ParseRegionError> {
        if let Some(endpoint) = self.localstack_test_mode_endpoint.clone() {
            Ok(Region::Custom {
                name: self.region.clone(),
                endpoint,
            })
        } else {
            Region::from_str(&self.region)
        }
    }
}
