#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use stem_solver::core::{Inference, InferenceResult, ModelInput, ModelSelection};
use stem_solver::domain::model::MessageContent;
use stem_solver::{Result, SolverError};
use tokio::sync::Mutex;

pub const VISION_MODEL: &str = "@cf/meta/llama-3.2-11b-vision-instruct";
pub const SOLVER_MODEL: &str = "@cf/meta/llama-3.1-70b-instruct";
pub const IMAGE_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAAB";

pub fn models() -> ModelSelection {
    ModelSelection {
        vision: VISION_MODEL.to_string(),
        solver: SOLVER_MODEL.to_string(),
    }
}

pub fn solve_body(image_data_url: &str) -> Vec<u8> {
    serde_json::json!({ "imageDataUrl": image_data_url })
        .to_string()
        .into_bytes()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    WarmUp,
    Vision,
    Text,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub kind: CallKind,
    pub model: String,
    pub input: ModelInput,
}

#[derive(Debug, Clone)]
pub enum Reply {
    Ok(InferenceResult),
    Fail(String),
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Ok(InferenceResult::Text(text.to_string()))
    }

    fn into_result(self) -> Result<InferenceResult> {
        match self {
            Reply::Ok(result) => Ok(result),
            Reply::Fail(message) => Err(SolverError::Inference { message }),
        }
    }
}

/// A scripted inference capability for tests. Warm-up calls always get the
/// same reply; OCR and solver calls consume their queues in order.
pub struct MockInference {
    warm_up: Reply,
    ocr: Mutex<VecDeque<Reply>>,
    solver: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockInference {
    pub fn new() -> Self {
        Self {
            warm_up: Reply::Ok(InferenceResult::Opaque(serde_json::json!({}))),
            ocr: Mutex::new(VecDeque::new()),
            solver: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_warm_up(mut self, reply: Reply) -> Self {
        self.warm_up = reply;
        self
    }

    pub fn with_ocr(mut self, reply: Reply) -> Self {
        self.ocr.get_mut().push_back(reply);
        self
    }

    pub fn with_solver(mut self, reply: Reply) -> Self {
        self.solver.get_mut().push_back(reply);
        self
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn kinds(&self) -> Vec<CallKind> {
        self.calls.lock().await.iter().map(|c| c.kind).collect()
    }
}

#[async_trait]
impl Inference for MockInference {
    async fn run(&self, model: &str, input: &ModelInput) -> Result<InferenceResult> {
        let kind = match input {
            ModelInput::Prompt { .. } => CallKind::WarmUp,
            ModelInput::Chat { messages, .. } => match messages.first().map(|m| &m.content) {
                Some(MessageContent::Parts(_)) => CallKind::Vision,
                _ => CallKind::Text,
            },
        };

        self.calls.lock().await.push(RecordedCall {
            kind,
            model: model.to_string(),
            input: input.clone(),
        });

        let reply = match kind {
            CallKind::WarmUp => Some(self.warm_up.clone()),
            CallKind::Vision => self.ocr.lock().await.pop_front(),
            CallKind::Text => self.solver.lock().await.pop_front(),
        };

        reply
            .ok_or_else(|| SolverError::Inference {
                message: format!("MockInference: no scripted reply for {:?}", kind),
            })?
            .into_result()
    }
}
