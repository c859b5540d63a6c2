use crate::core::extract::{best_effort_text, extract_clean_question};
use crate::core::prompts::{
    solver_prompt, LICENSE_AGREEMENT_PROMPT, OCR_PARAMS, OCR_PROMPT, SOLVER_PARAMS,
};
use crate::core::response::HandlerResponse;
use crate::domain::model::{InferenceOutcome, ModelInput, ModelSelection, SolveRequest};
use crate::domain::ports::Inference;
use crate::utils::error::Rejection;
use http::Method;
use serde_json::Value;

const IMAGE_DATA_URL_PREFIX: &str = "data:image";

pub struct SolveHandler<I: Inference> {
    inference: I,
    models: ModelSelection,
}

impl<I: Inference> SolveHandler<I> {
    pub fn new(inference: I, models: ModelSelection) -> Self {
        Self { inference, models }
    }

    pub fn inference(&self) -> &I {
        &self.inference
    }

    /// Full request lifecycle: warm-up, method dispatch, validation, solve.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> HandlerResponse {
        self.accept_vision_license().await;

        match *method {
            Method::OPTIONS => return HandlerResponse::preflight(),
            Method::POST => {}
            _ => {
                tracing::debug!("Rejecting {} request", method);
                return Rejection::UnsupportedMethod.into();
            }
        }

        let request = match parse_solve_request(body) {
            Ok(request) => request,
            Err(rejection) => {
                tracing::debug!("Rejecting request body: {}", rejection);
                return rejection.into();
            }
        };

        let result = match self.solve(&request).await {
            Ok(outcome) => HandlerResponse::solved(&outcome).map_err(Rejection::server),
            Err(rejection) => Err(rejection),
        };

        result.unwrap_or_else(|rejection| {
            tracing::warn!("Solve failed: {}", rejection);
            rejection.into()
        })
    }

    /// OCR, question extraction and solving, strictly in that order.
    pub async fn solve(&self, request: &SolveRequest) -> Result<InferenceOutcome, Rejection> {
        tracing::debug!("Running OCR with {}", self.models.vision);
        let ocr = self
            .inference
            .run_vision_ocr(
                &self.models.vision,
                OCR_PROMPT,
                &request.image_data_url,
                OCR_PARAMS,
            )
            .await
            .map_err(Rejection::server)?;
        let ocr_full = best_effort_text(ocr).map_err(Rejection::server)?;

        if ocr_full.is_empty() {
            return Err(Rejection::OcrFailed);
        }
        tracing::debug!("OCR produced {} characters", ocr_full.len());

        let clean_question = extract_clean_question(&ocr_full).to_string();

        tracing::debug!("Solving with {}", self.models.solver);
        let solution = self
            .inference
            .run_text_completion(
                &self.models.solver,
                &solver_prompt(&clean_question),
                SOLVER_PARAMS,
            )
            .await
            .map_err(Rejection::server)?;
        let solution = best_effort_text(solution).map_err(Rejection::server)?;

        Ok(InferenceOutcome {
            ocr_full,
            clean_question,
            solution,
        })
    }

    // Result discarded; it never reaches the response or the logs.
    async fn accept_vision_license(&self) {
        let _ = self
            .inference
            .run(
                &self.models.vision,
                &ModelInput::prompt(LICENSE_AGREEMENT_PROMPT),
            )
            .await;
    }
}

pub fn parse_solve_request(body: &[u8]) -> Result<SolveRequest, Rejection> {
    let value: Value = serde_json::from_slice(body).map_err(|_| Rejection::InvalidJson)?;

    match value.get("imageDataUrl") {
        Some(Value::String(url)) if url.starts_with(IMAGE_DATA_URL_PREFIX) => Ok(SolveRequest {
            image_data_url: url.clone(),
        }),
        _ => Err(Rejection::InvalidImageDataUrl),
    }
}
