//! Single-lookup orchestration: decide whether the input is a URL or a
//! name, resolve names through search + disambiguation, fetch, classify.

use storescout_detect::detect_platforms;
use storescout_fetch::PageFetcher;
use storescout_resolve::StoreResolver;

/// A completed classification of a storefront page.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Host of the final (post-redirect) URL.
    pub domain: String,
    /// Matched platforms in signature-table order.
    pub platforms: Vec<String>,
}

impl Classification {
    /// The primary platform: first match in signature-table order.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.platforms.first().map(String::as_str)
    }
}

/// Caller-visible outcome of a single lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    /// Name-based lookup produced no resolvable URL.
    NotFound,
    /// A URL was identified but its content could not be retrieved.
    Unreachable { url: String },
    /// Content was retrieved and classified. An empty platform list is a
    /// valid negative result, not an error.
    Classified(Classification),
}

/// Heuristic for "is this input already a URL": contains both a dot and a
/// slash. Bare domains without a path fall through to the search path.
pub(crate) fn looks_like_url(input: &str) -> bool {
    input.contains('.') && input.contains('/')
}

/// Extracts the hostname from a URL.
///
/// Strips the scheme and takes up to the first `/`. Falls back to the full
/// string when there is no scheme to strip.
pub(crate) fn host_of(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

/// Classifies a single brand name or URL.
///
/// Name inputs go through `resolver`; a missing resolver (no credentials
/// configured) or an empty search result is [`LookupOutcome::NotFound`].
/// Fetch failures become [`LookupOutcome::Unreachable`]. Everything that
/// could be retrieved is classified, even when no signature matches.
pub async fn classify(
    input: &str,
    resolver: Option<&StoreResolver>,
    fetcher: &PageFetcher,
) -> LookupOutcome {
    let target_url = if looks_like_url(input) {
        input.to_owned()
    } else {
        let Some(resolver) = resolver else {
            tracing::warn!(input, "search credentials not configured; cannot resolve name");
            return LookupOutcome::NotFound;
        };
        match resolver.resolve(input).await {
            Some(url) => url,
            None => return LookupOutcome::NotFound,
        }
    };

    let fetched = fetcher.fetch(&target_url).await;
    let Some(html) = fetched.html else {
        return LookupOutcome::Unreachable {
            url: fetched.final_url,
        };
    };

    let platforms = detect_platforms(&html)
        .into_iter()
        .map(str::to_owned)
        .collect();

    LookupOutcome::Classified(Classification {
        domain: host_of(&fetched.final_url).to_owned(),
        platforms,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
