#[derive(Clone)]
pub struct AppConfig {
    /// Google Custom Search API key. `None` disables name resolution.
    pub google_api_key: Option<String>,
    /// Google Custom Search engine id (`cx`).
    pub google_cx: Option<String>,
    /// Gemini API key. `None` disables AI disambiguation.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("google_cx", &self.google_cx)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_user_agent", &self.fetch_user_agent)
            .finish()
    }
}
