use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    Config(String),
    Network(String),
    Auth(String),
    Query(String),
    Decode(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "Config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "Network error: {msg}"),
            ProviderError::Auth(msg) => write!(f, "Auth error: {msg}"),
            ProviderError::Query(msg) => write!(f, "Query error: {msg}"),
            ProviderError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl Error for ProviderError {}
