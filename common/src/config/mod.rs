pub mod aws_client_config;

use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;
use strum::{Display, EnumIter};

#[derive(Default, Clone, Eq, PartialEq, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Local,
    #[default]
    Development,
    QA,
    Staging,
    Production,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to load configuration: {0}")]
    Load(#[from] envy::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the default configuration for the project. This is the
    /// configuration used when running inside Lambda.
    ///
    /// This will load the following files, in order:
    /// - OS environment variables
    /// - `.env.development` then `.env.development.local`
    /// - `.env.qa` then `.env.qa.local`
    /// - `.env.staging` then `.env.staging.local`
    /// - `.env.production` then `.env.production.local`
    /// - `.env.local`
    /// - `.env`
    ///
    /// If a variable is set in the OS environment, it will not be
    /// overriden by any file. A missing required variable is an error.
    pub fn load_default<TConfig>() -> Result<TConfig, ConfigError>
    where
        TConfig: DeserializeOwned,
    {
        for environment in Environment::iter() {
            if environment != Environment::Local {
                dotenv::from_filename(format!(".env.{environment}.local")).ok();
                dotenv::from_filename(format!(".env.{environment}")).ok();
            }
        }

        ConfigLoader::load::<TConfig>()
    }

    fn load<TConfig>() -> Result<TConfig, ConfigError>
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        Ok(envy::from_env::<TConfig>()?)
    }

    /// Deserializes a configuration from an explicit set of variables instead of
    /// the process environment.
    pub fn load_from<TConfig, I>(vars: I) -> Result<TConfig, ConfigError>
    where
        TConfig: DeserializeOwned,
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, TConfig>(vars)?)
    }
}
