use crate::core::handler::SolveHandler;
use crate::core::response::HandlerResponse;
use crate::core::Inference;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Data URLs inflate images by a third; leave room for phone photos.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Every path and method goes to the solve handler.
pub fn router<I: Inference + 'static>(handler: SolveHandler<I>, max_body_bytes: usize) -> Router {
    Router::new()
        .fallback(solve::<I>)
        .with_state(Arc::new(handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn solve<I: Inference + 'static>(
    State(handler): State<Arc<SolveHandler<I>>>,
    method: Method,
    body: Bytes,
) -> HandlerResponse {
    handler.handle(&method, &body).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut headers = HeaderMap::new();
        for (name, value) in self.headers() {
            if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
                headers.insert(name, HeaderValue::from_static(value));
            }
        }

        (status, headers, self.body).into_response()
    }
}
