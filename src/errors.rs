// errors.rs
use std::fmt;

/// Errors originating from server logic (routing, missing resources, etc.).
/// Provider failures are absorbed into an empty-board render and never
/// surface here; see `provider::ProviderError`.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
