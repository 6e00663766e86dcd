//! Configuration for Estoque API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}
