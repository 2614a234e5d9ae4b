use rstest::fixture;
use wiremock::MockServer;

pub const WEBHOOK_PATH: &str = "/webhook";

pub struct WebhookFixture {
    pub mock_server: MockServer,
}

impl WebhookFixture {
    pub fn url(&self) -> String {
        format!("{}{WEBHOOK_PATH}", self.mock_server.uri())
    }
}

#[fixture]
pub async fn webhook_fixture() -> WebhookFixture {
    WebhookFixture {
        mock_server: MockServer::start().await,
    }
}
