//! Error types for the status image proxy

use std::fmt;

#[derive(Debug)]
pub enum ProxyError {
    Cache(status_image_cache::CacheError),
    Origin(status_origin_client::OriginError),
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::Cache(err) => write!(f, "Cache error: {}", err),
            ProxyError::Origin(err) => write!(f, "Origin error: {}", err),
            ProxyError::Io(err) => write!(f, "IO error: {}", err),
            ProxyError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::Cache(err) => Some(err),
            ProxyError::Origin(err) => Some(err),
            ProxyError::Io(err) => Some(err.as_ref()),
            ProxyError::Config(_) => None,
        }
    }
}

impl From<status_image_cache::CacheError> for ProxyError {
    fn from(err: status_image_cache::CacheError) -> Self {
        ProxyError::Cache(err)
    }
}

impl From<status_origin_client::OriginError> for ProxyError {
    fn from(err: status_origin_client::OriginError) -> Self {
        ProxyError::Origin(err)
    }
}

impl From<std::io::Error> for ProxyError {
    fn from(err: std::io::Error) -> Self {
        ProxyError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for ProxyError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        ProxyError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ProxyError::Config("missing --cache".to_string());
        assert_eq!(format!("{}", err), "Configuration error: missing --cache");
    }

    #[test]
    fn test_cache_error_display() {
        let err = ProxyError::Cache(status_image_cache::CacheError::NotFound);
        assert_eq!(format!("{}", err), "Cache error: Cache entry not found");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err: ProxyError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert!(err.source().is_some());
        assert!(format!("{}", err).contains("port taken"));
    }
}
