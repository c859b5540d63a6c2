use crate::core::{ConfigProvider, Inference, InferenceResult, ModelInput, Result};
use crate::utils::error::SolverError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare Workers AI over its REST API.
#[derive(Debug, Clone)]
pub struct WorkersAiClient {
    client: Client,
    api_base: String,
    account_id: String,
    api_token: String,
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
}

impl WorkersAiClient {
    pub fn new(api_base: String, account_id: String, api_token: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
            account_id,
            api_token,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.api_base().to_string(),
            config.account_id().to_string(),
            config.api_token().to_string(),
        )
    }

    pub fn run_url(&self, model: &str) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.api_base.trim_end_matches('/'),
            self.account_id,
            model
        )
    }
}

#[async_trait]
impl Inference for WorkersAiClient {
    async fn run(&self, model: &str, input: &ModelInput) -> Result<InferenceResult> {
        let url = self.run_url(model);
        tracing::debug!("Making inference request to: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(input)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Inference response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SolverError::Upstream {
                model: model.to_string(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let value: Value = serde_json::from_str(&body)?;
        if value.get("success") == Some(&Value::Bool(false)) {
            return Err(SolverError::Upstream {
                model: model.to_string(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        match serde_json::from_value::<RunEnvelope>(value.clone()) {
            Ok(RunEnvelope {
                result: Some(result),
                ..
            }) => Ok(result.into()),
            _ => Ok(value.into()),
        }
    }
}

fn join_errors(errors: &[ApiMessage]) -> Option<String> {
    if errors.is_empty() {
        return None;
    }
    Some(
        errors
            .iter()
            .map(|e| match (e.message.trim(), e.code) {
                ("", Some(code)) => format!("code {}", code),
                (message, Some(code)) => format!("{} (code {})", message, code),
                (message, None) => message.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<RunEnvelope>(body)
        .ok()
        .and_then(|envelope| join_errors(&envelope.errors))
        .unwrap_or_else(|| body.trim().to_string())
}
