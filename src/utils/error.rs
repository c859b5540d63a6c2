use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{model} returned {status}: {message}")]
    Upstream {
        model: String,
        status: u16,
        message: String,
    },

    #[error("Inference error: {message}")]
    Inference { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl SolverError {
    /// Short operator hint printed next to startup failures.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SolverError::Http(_) | SolverError::Upstream { .. } => {
                "Check network access to the inference API and that the API token is valid"
            }
            SolverError::MissingConfigError { .. } => {
                "Set CLOUDFLARE_ACCOUNT_ID and CLOUDFLARE_API_TOKEN, or pass --config"
            }
            SolverError::ConfigError { .. }
            | SolverError::InvalidConfigValueError { .. }
            | SolverError::ConfigValidationError { .. } => {
                "Review the configuration file and command line flags"
            }
            SolverError::Io(_) => "Check that the file exists and is readable",
            SolverError::Serialization(_) | SolverError::Inference { .. } => {
                "Inspect the logs with --verbose for the upstream payload"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// A request the handler refuses to complete. `Display` is the exact
/// plain-text body returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Use POST with JSON: {{ imageDataUrl }}")]
    UnsupportedMethod,

    #[error("Invalid JSON body")]
    InvalidJson,

    #[error("Missing or invalid imageDataUrl")]
    InvalidImageDataUrl,

    #[error("OCR failed")]
    OcrFailed,

    #[error("Server error: {0}")]
    Server(String),
}

impl Rejection {
    pub fn server(err: impl std::fmt::Display) -> Self {
        Rejection::Server(err.to_string())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Rejection::UnsupportedMethod
            | Rejection::InvalidJson
            | Rejection::InvalidImageDataUrl => 400,
            Rejection::OcrFailed | Rejection::Server(_) => 500,
        }
    }
}
