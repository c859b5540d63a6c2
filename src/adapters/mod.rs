// Adapters layer: concrete implementations for external systems (inference API, HTTP hosting).

pub mod server;
pub mod workers_ai;

#[cfg(feature = "lambda")]
pub mod function_url;
