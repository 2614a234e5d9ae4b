use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Webhook receiving the inserted items.
    pub api_url: String,
}
