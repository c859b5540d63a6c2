#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

use crate::adapters::server::DEFAULT_MAX_BODY_BYTES;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SolverError};
use crate::utils::validation::{
    validate_model_id, validate_non_empty_string, validate_positive_number, validate_range,
    validate_required_secret, validate_url, Validate,
};
use std::net::SocketAddr;

pub use crate::adapters::workers_ai::DEFAULT_API_BASE;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_VISION_MODEL: &str = "@cf/meta/llama-3.2-11b-vision-instruct";
pub const DEFAULT_SOLVER_MODEL: &str = "@cf/meta/llama-3.1-70b-instruct";

/// Fully resolved settings for the HTTP host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub api_base: String,
    pub account_id: String,
    pub api_token: String,
    pub vision_model: String,
    pub solver_model: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            api_base: DEFAULT_API_BASE.to_string(),
            account_id: String::new(),
            api_token: String::new(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            solver_model: DEFAULT_SOLVER_MODEL.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| SolverError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: format!("Invalid listen address: {}", e),
            })
    }
}

impl ConfigProvider for ServiceConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn api_token(&self) -> &str {
        &self.api_token
    }

    fn vision_model(&self) -> &str {
        &self.vision_model
    }

    fn solver_model(&self) -> &str {
        &self.solver_model
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        self.socket_addr()?;
        validate_positive_number("max_body_bytes", self.max_body_bytes, 1)?;
        validate_provider(self)?;

        tracing::debug!("Service configuration validation passed");
        Ok(())
    }
}

/// Checks shared by every host: API endpoint, credentials and model ids.
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_url("api_base", config.api_base())?;
    validate_required_secret("account_id", config.account_id())?;
    validate_required_secret("api_token", config.api_token())?;
    validate_model_id("vision_model", config.vision_model())?;
    validate_model_id("solver_model", config.solver_model())?;
    Ok(())
}
