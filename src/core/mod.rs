pub mod extract;
pub mod handler;
pub mod prompts;
pub mod response;

pub use crate::domain::model::{InferenceOutcome, InferenceResult, ModelInput, ModelSelection};
pub use crate::domain::ports::{ConfigProvider, Inference};
pub use crate::utils::error::Result;
