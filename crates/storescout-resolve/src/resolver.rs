use crate::disambiguate::pick_official_url;
use crate::gemini::GeminiClient;
use crate::search::SearchClient;

/// Name-to-storefront resolver: web search plus AI disambiguation.
///
/// This is the fail-soft boundary for both external services. `resolve`
/// returns `None` when the search fails or comes back empty; once there is
/// at least one candidate it always returns a URL, because disambiguation
/// falls back to the top result on model failure.
pub struct StoreResolver {
    search: SearchClient,
    gemini: GeminiClient,
}

impl StoreResolver {
    #[must_use]
    pub fn new(search: SearchClient, gemini: GeminiClient) -> Self {
        Self { search, gemini }
    }

    /// Resolves a brand name to its most likely official storefront URL.
    pub async fn resolve(&self, query: &str) -> Option<String> {
        let candidates = match self.search.search(query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(query, error = %e, "storefront search failed");
                return None;
            }
        };

        if candidates.is_empty() {
            tracing::info!(query, "storefront search returned no results");
            return None;
        }

        pick_official_url(&self.gemini, query, &candidates).await
    }
}
