//! File-based image cache keyed by three-digit status codes
//!
//! Every entry lives at `<cache root>/<code>.jpg`. There is no in-memory
//! index: the directory is the source of truth and is queried on each call.

mod cache;
mod error;
mod key;

pub use cache::{ImageCache, InitOutcome, ENTRY_EXTENSION};
pub use error::{CacheError, Result};
pub use key::CacheKey;
