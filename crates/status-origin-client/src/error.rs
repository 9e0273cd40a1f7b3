//! Error types for the origin client

use std::fmt;

#[derive(Debug)]
pub enum OriginError {
    /// Transport failure, timeout, or body read failure
    Http(Box<reqwest::Error>),
    /// Origin answered with a non-success status
    Status(reqwest::StatusCode),
}

impl OriginError {
    /// True when the origin itself answered, as opposed to being unreachable
    pub fn is_origin_response(&self) -> bool {
        matches!(self, OriginError::Status(_))
    }
}

impl fmt::Display for OriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginError::Http(err) => write!(f, "HTTP error: {}", err),
            OriginError::Status(status) => write!(f, "Origin returned status {}", status),
        }
    }
}

impl std::error::Error for OriginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OriginError::Http(err) => Some(err.as_ref()),
            OriginError::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for OriginError {
    fn from(err: reqwest::Error) -> Self {
        OriginError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, OriginError>;
