use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Table every parsed row is written into.
    pub table_name: String,
}
