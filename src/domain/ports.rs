use crate::domain::model::{GenerationParams, InferenceResult, ModelInput};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The hosted inference capability. Implementors only provide `run`; the
/// stage-level operations are expressed on top of it.
#[async_trait]
pub trait Inference: Send + Sync {
    async fn run(&self, model: &str, input: &ModelInput) -> Result<InferenceResult>;

    async fn run_vision_ocr(
        &self,
        model: &str,
        prompt: &str,
        image_data_url: &str,
        params: GenerationParams,
    ) -> Result<InferenceResult> {
        self.run(model, &ModelInput::vision(prompt, image_data_url, params))
            .await
    }

    async fn run_text_completion(
        &self,
        model: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<InferenceResult> {
        self.run(model, &ModelInput::text(prompt, params)).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn account_id(&self) -> &str;
    fn api_token(&self) -> &str;
    fn vision_model(&self) -> &str;
    fn solver_model(&self) -> &str;
}
