//! Platform classification of storefront markup.
//!
//! Matches raw HTML against an ordered table of e-commerce platform
//! signatures. Pure string work: no network access, no shared mutable
//! state. See [`signatures::SIGNATURES`] for the rule table and
//! [`detect_platforms`] for the matcher.

pub mod detect;
pub mod signatures;

pub use detect::detect_platforms;
pub use signatures::{PlatformSignature, SIGNATURES};
