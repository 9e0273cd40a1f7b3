//! Status Image Origin Client
//!
//! Fetches status code images from a remote origin addressed as
//! `<base url>/<code>`. One attempt per call, no retries.

pub mod client;
pub mod error;

pub use client::{OriginClient, DEFAULT_ORIGIN_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{OriginError, Result};
