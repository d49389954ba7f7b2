//! Minimal client for the Gemini `generateContent` endpoint.
//!
//! Sends a single-turn text prompt and returns the first candidate's text.
//! Everything beyond that — parsing the reply into a URL, fallbacks — is
//! the caller's concern (see [`crate::disambiguate`]).

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Client for text completion against a Gemini model.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str) -> Result<Self, ResolveError> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ResolveError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        base_url: &str,
    ) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .user_agent("storescout/0.1 (platform-detection)")
            .build()?;

        let raw = format!(
            "{}/v1beta/models/{model}:generateContent",
            base_url.trim_end_matches('/')
        );
        let endpoint = Url::parse(&raw).map_err(|e| ResolveError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Runs a single-turn completion and returns the first candidate's text.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnexpectedStatus`] on any non-2xx HTTP status.
    /// - [`ResolveError::Http`] on network failure.
    /// - [`ResolveError::Deserialize`] if the response body is not the
    ///   expected JSON shape.
    /// - [`ResolveError::EmptyCompletion`] if the response carries no
    ///   candidate text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ResolveError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self.client.post(url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: "generateContent".to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| ResolveError::Deserialize {
                context: "generateContent response".to_owned(),
                source: e,
            })?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(ResolveError::EmptyCompletion)
    }
}
