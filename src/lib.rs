pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::workers_ai::WorkersAiClient;
pub use config::ServiceConfig;
pub use core::handler::SolveHandler;
pub use core::response::HandlerResponse;
pub use utils::error::{Rejection, Result, SolverError};
