use crate::domain::model::InferenceOutcome;
use crate::utils::error::{Rejection, Result};

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// Transport-neutral response produced by the handler. The HTTP and Lambda
/// hosts translate it into their own response types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: String,
}

impl HandlerResponse {
    pub fn preflight() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: String::new(),
        }
    }

    pub fn solved(outcome: &InferenceOutcome) -> Result<Self> {
        Ok(Self {
            status: 200,
            content_type: Some(JSON_CONTENT_TYPE),
            body: serde_json::to_string_pretty(outcome)?,
        })
    }

    /// CORS headers on every response, plus the content type when there is a body.
    pub fn headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = CORS_HEADERS.to_vec();
        if let Some(content_type) = self.content_type {
            headers.push(("Content-Type", content_type));
        }
        headers
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers()
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }
}

impl From<Rejection> for HandlerResponse {
    fn from(rejection: Rejection) -> Self {
        Self {
            status: rejection.status_code(),
            content_type: Some(TEXT_CONTENT_TYPE),
            body: rejection.to_string(),
        }
    }
}
