use rusoto_core::credential::StaticProvider;
use rusoto_core::request::HttpClient;
use rusoto_core::Region;
use rusoto_dynamodb::DynamoDbClient;
use rusoto_s3::S3Client;

fn local_region(endpoint: String) -> Region {
    Region::Custom {
        name: "us-west-2".to_owned(),
        endpoint,
    }
}

fn credentials() -> StaticProvider {
    StaticProvider::new_minimal("test".to_owned(), "test".to_owned())
}

pub fn local_dynamodb_client(endpoint: String) -> DynamoDbClient {
    DynamoDbClient::new_with(
        HttpClient::new().unwrap(),
        credentials(),
        local_region(endpoint),
    )
}

pub fn local_s3_client(endpoint: String) -> S3Client {
    S3Client::new_with(
        HttpClient::new().unwrap(),
        credentials(),
        local_region(endpoint),
    )
}
