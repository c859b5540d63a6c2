#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use stem_solver::adapters::function_url::{FunctionUrlRequest, FunctionUrlResponse};
#[cfg(feature = "lambda")]
use stem_solver::core::ModelSelection;
#[cfg(feature = "lambda")]
use stem_solver::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use stem_solver::{LambdaConfig, SolveHandler, WorkersAiClient};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &SolveHandler<WorkersAiClient>,
    event: LambdaEvent<FunctionUrlRequest>,
) -> Result<FunctionUrlResponse, Error> {
    let request = event.payload;
    let method = request.method();
    tracing::info!(request_id = %event.context.request_id, "Handling {} request", method);

    let response = handler.handle(&method, &request.body_bytes()).await;

    tracing::info!("Responding with status {}", response.status);
    Ok(response.into())
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let handler = Arc::new(SolveHandler::new(
        WorkersAiClient::from_config(&config),
        ModelSelection::from_config(&config),
    ));

    run(service_fn(move |event| {
        let handler = Arc::clone(&handler);
        async move { function_handler(&handler, event).await }
    }))
    .await
}
