//! Fail-soft page retrieval for storefront classification.
//!
//! A single GET per URL, presented with a browser identity. Any failure —
//! non-200 status, timeout, TLS problem, unreadable body — is absorbed
//! into an absent-html [`FetchResult`] rather than an error, so callers
//! treat it as "could not classify" and move on.

pub mod error;
pub mod fetcher;

pub use error::FetchError;
pub use fetcher::{FetchResult, PageFetcher};
