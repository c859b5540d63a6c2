use crate::core::ConfigProvider;
use crate::utils::error::{Result, SolverError};
use crate::utils::validation::Validate;
use std::env;

use super::{DEFAULT_API_BASE, DEFAULT_SOLVER_MODEL, DEFAULT_VISION_MODEL};

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_base: String,
    pub account_id: String,
    pub api_token: String,
    pub vision_model: String,
    pub solver_model: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base: env::var("CLOUDFLARE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            account_id: env::var("CLOUDFLARE_ACCOUNT_ID").map_err(|_| {
                SolverError::MissingConfigError {
                    field: "CLOUDFLARE_ACCOUNT_ID".to_string(),
                }
            })?,
            api_token: env::var("CLOUDFLARE_API_TOKEN").map_err(|_| {
                SolverError::MissingConfigError {
                    field: "CLOUDFLARE_API_TOKEN".to_string(),
                }
            })?,
            vision_model: env::var("STEM_VISION_MODEL")
                .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string()),
            solver_model: env::var("STEM_SOLVER_MODEL")
                .unwrap_or_else(|_| DEFAULT_SOLVER_MODEL.to_string()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
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

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        super::validate_provider(self)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
