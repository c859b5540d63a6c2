use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The validated body of a solve request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub image_data_url: String,
}

/// The three strings returned to the caller on success. Field order is the
/// order of the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceOutcome {
    pub ocr_full: String,
    pub clean_question: String,
    pub solution: String,
}

/// What a model run produced: a plain `response` string, or some other payload.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResult {
    Text(String),
    Opaque(Value),
}

impl From<Value> for InferenceResult {
    fn from(value: Value) -> Self {
        match value.get("response") {
            Some(Value::String(text)) => InferenceResult::Text(text.clone()),
            _ => InferenceResult::Opaque(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelInput {
    Prompt {
        prompt: String,
    },
    Chat {
        messages: Vec<ChatMessage>,
        temperature: f64,
        max_tokens: u32,
    },
}

impl ModelInput {
    pub fn prompt(prompt: impl Into<String>) -> Self {
        ModelInput::Prompt {
            prompt: prompt.into(),
        }
    }

    /// A single user turn carrying an instruction and an image.
    pub fn vision(prompt: &str, image_url: &str, params: GenerationParams) -> Self {
        ModelInput::Chat {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: prompt.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_url.to_string(),
                        },
                    },
                ]),
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }

    pub fn text(prompt: &str, params: GenerationParams) -> Self {
        ModelInput::Chat {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Text(prompt.to_string()),
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Which hosted models serve each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub vision: String,
    pub solver: String,
}

impl ModelSelection {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            vision: config.vision_model().to_string(),
            solver: config.solver_model().to_string(),
        }
    }
}
