// errors.rs
use crate::data::DataSourceError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, widget input, page lookup) or the data layer (CSV extracts).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Data Source Error: {0}")]
    DataSource(#[from] DataSourceError),
    /// Programmer error: a page or column the dashboard does not know about.
    #[error("Configuration Error: {0}")]
    Configuration(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DataSource(_)
            | ServerError::Configuration(_)
            | ServerError::InternalError => 500,
        }
    }
}
