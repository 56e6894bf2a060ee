//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for propgraph.
#[derive(Error, Debug)]
pub enum AppError {
    // Endpoint errors
    #[error("SPARQL transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SPARQL endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("Malformed SPARQL results: {0}")]
    MalformedResponse(String),

    #[error("SPARQL query error: {message}")]
    Query { message: String, query: String },

    #[error("Variable '{0}' not bound in result row")]
    MissingVariable(String),

    // Input errors
    #[error("Invalid property configuration: {0}")]
    PropertyConfig(#[from] serde_json::Error),

    #[error("Invalid entity file {}:{line}: {message}", path.display())]
    EntityFile {
        path: PathBuf,
        line: usize,
        message: String,
    },

    // Output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("No SPARQL endpoint configured. Pass --endpoint or set endpoint.url.")]
    MissingEndpoint,
}

impl AppError {
    /// Returns true when the endpoint could not be reached or answered badly,
    /// as opposed to local input or output problems.
    pub fn is_endpoint_failure(&self) -> bool {
        matches!(
            self,
            AppError::Http(_)
                | AppError::Endpoint { .. }
                | AppError::MalformedResponse(_)
                | AppError::Query { .. }
        )
    }
}
