use super::toml_config::TomlConfig;
use super::{
    ServiceConfig, DEFAULT_API_BASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SOLVER_MODEL,
    DEFAULT_VISION_MODEL,
};
use crate::adapters::server::DEFAULT_MAX_BODY_BYTES;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "stem-solver")]
#[command(about = "Photo-to-solution STEM solver backed by hosted vision and language models")]
pub struct CliConfig {
    #[arg(long, short, help = "TOML configuration file; replaces the other settings")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[arg(long, env = "CLOUDFLARE_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, env = "CLOUDFLARE_ACCOUNT_ID", default_value = "")]
    pub account_id: String,

    #[arg(long, env = "CLOUDFLARE_API_TOKEN", default_value = "", hide_env_values = true)]
    pub api_token: String,

    #[arg(long, env = "STEM_VISION_MODEL", default_value = DEFAULT_VISION_MODEL)]
    pub vision_model: String,

    #[arg(long, env = "STEM_SOLVER_MODEL", default_value = DEFAULT_SOLVER_MODEL)]
    pub solver_model: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ServiceConfig> {
        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            return Ok(TomlConfig::from_file(path)?.into_service_config());
        }

        Ok(ServiceConfig {
            host: self.host.clone(),
            port: self.port,
            max_body_bytes: self.max_body_bytes,
            api_base: self.api_base.clone(),
            account_id: self.account_id.clone(),
            api_token: self.api_token.clone(),
            vision_model: self.vision_model.clone(),
            solver_model: self.solver_model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_resolve_into_service_config() {
        let cli = CliConfig::parse_from([
            "stem-solver",
            "--port",
            "9000",
            "--account-id",
            "acct",
            "--api-token",
            "token",
            "--solver-model",
            "@cf/qwen/qwq-32b",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.account_id, "acct");
        assert_eq!(config.api_token, "token");
        assert_eq!(config.solver_model, "@cf/qwen/qwq-32b");
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_config_file_replaces_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stem-solver.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9100

[cloudflare]
account_id = "file-acct"
api_token = "file-token"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "stem-solver",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "9000",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.account_id, "file-acct");
    }
}
