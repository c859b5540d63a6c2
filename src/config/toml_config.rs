use super::{
    ServiceConfig, DEFAULT_API_BASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SOLVER_MODEL,
    DEFAULT_VISION_MODEL,
};
use crate::adapters::server::DEFAULT_MAX_BODY_BYTES;
use crate::utils::error::{Result, SolverError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    pub cloudflare: CloudflareSection,
    #[serde(default)]
    pub models: ModelsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudflareSection {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub account_id: String,
    pub api_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsSection {
    pub vision: String,
    pub solver: String,
}

impl Default for ModelsSection {
    fn default() -> Self {
        Self {
            vision: DEFAULT_VISION_MODEL.to_string(),
            solver: DEFAULT_SOLVER_MODEL.to_string(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SolverError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SolverError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CLOUDFLARE_API_TOKEN})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_service_config(self) -> ServiceConfig {
        ServiceConfig {
            host: self.server.host,
            port: self.server.port,
            max_body_bytes: self.server.max_body_bytes,
            api_base: self.cloudflare.api_base,
            account_id: self.cloudflare.account_id,
            api_token: self.cloudflare.api_token,
            vision_model: self.models.vision,
            solver_model: self.models.solver,
        }
    }
}
