//! Lambda Function URL payloads (format 2.0).

use crate::core::response::HandlerResponse;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlRequest {
    pub request_context: RequestContext,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Deserialize)]
pub struct RequestContext {
    pub http: HttpDescription,
}

#[derive(Debug, Deserialize)]
pub struct HttpDescription {
    pub method: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl FunctionUrlRequest {
    /// Unknown verbs fall through to the handler's non-POST rejection.
    pub fn method(&self) -> Method {
        Method::from_bytes(self.request_context.http.method.as_bytes()).unwrap_or(Method::GET)
    }

    /// Raw body bytes. An undecodable base64 body yields an empty body,
    /// which the handler rejects as invalid JSON.
    pub fn body_bytes(&self) -> Vec<u8> {
        let Some(body) = self.body.as_deref() else {
            return Vec::new();
        };

        if self.is_base64_encoded {
            STANDARD.decode(body).unwrap_or_else(|e| {
                tracing::debug!("Discarding undecodable base64 body: {}", e);
                Vec::new()
            })
        } else {
            body.as_bytes().to_vec()
        }
    }
}

impl From<HandlerResponse> for FunctionUrlResponse {
    fn from(response: HandlerResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response
                .headers()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body: response.body,
            is_base64_encoded: false,
        }
    }
}
