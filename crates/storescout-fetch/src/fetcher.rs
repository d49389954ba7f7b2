use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

const ACCEPT_HEADER: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Outcome of a page fetch.
///
/// `html` is `None` on any failure. `final_url` reflects redirects when a
/// response was received; when the request never completed it is the
/// normalized input URL.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub html: Option<String>,
    pub final_url: String,
}

/// HTTP retriever for storefront pages.
///
/// Certificate validation is disabled: target storefronts routinely
/// present expired or mis-chained certificates, and retrieval takes
/// priority over strict TLS here.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches raw markup for `url`, prepending `https://` when the input
    /// has no scheme.
    ///
    /// Returns the body only for an HTTP 200 response. Every other status,
    /// plus network, timeout, and TLS failures, yields `html: None` — the
    /// failure is logged here, never propagated.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let url = normalize_url(url);

        let response = match self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "page fetch failed");
                return FetchResult {
                    html: None,
                    final_url: url,
                };
            }
        };

        // The response URL accounts for any redirects reqwest followed,
        // even when the terminal status is not a success.
        let final_url = response.url().to_string();
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            tracing::debug!(url = %final_url, status = status.as_u16(), "non-200 response");
            return FetchResult {
                html: None,
                final_url,
            };
        }

        match response.text().await {
            Ok(body) => FetchResult {
                html: Some(body),
                final_url,
            },
            Err(e) => {
                tracing::warn!(url = %final_url, error = %e, "failed to read response body");
                FetchResult {
                    html: None,
                    final_url,
                }
            }
        }
    }
}

/// Prepends `https://` to scheme-less input.
fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
#[path = "fetcher_test.rs"]
mod tests;
