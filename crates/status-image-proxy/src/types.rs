//! Core types for the status image proxy

use axum::http::Method;

/// The methods the cache understands; everything else is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMethod {
    Get,
    Put,
    Delete,
    Other,
}

impl From<&Method> for CacheMethod {
    fn from(method: &Method) -> Self {
        match *method {
            Method::GET => CacheMethod::Get,
            Method::PUT => CacheMethod::Put,
            Method::DELETE => CacheMethod::Delete,
            _ => CacheMethod::Other,
        }
    }
}

/// Where a served image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    Hit,
    Miss,
}

impl CacheSource {
    pub fn header_value(self) -> &'static str {
        match self {
            CacheSource::Hit => "HIT",
            CacheSource::Miss => "MISS",
        }
    }
}
