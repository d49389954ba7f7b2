//! Brand-name → storefront-URL resolution.
//!
//! Combines a web search ([`SearchClient`]) with AI disambiguation of the
//! result list ([`GeminiClient`] + [`disambiguate`]). The composed
//! [`StoreResolver`] is fail-soft at its boundary: every search or model
//! failure is logged and degraded to "no result" or a fallback candidate,
//! never an error to the caller.

pub mod disambiguate;
pub mod error;
pub mod gemini;
pub mod resolver;
pub mod search;

pub use disambiguate::pick_official_url;
pub use error::ResolveError;
pub use gemini::GeminiClient;
pub use resolver::StoreResolver;
pub use search::{SearchCandidate, SearchClient};
