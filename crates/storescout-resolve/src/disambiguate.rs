//! AI disambiguation of search candidates.
//!
//! The model's reply is free text and parsed heuristically; the parsing
//! lives in [`parse_model_answer`] so the heuristic can change without
//! touching callers. The public entry point never fails for a non-empty
//! candidate list: any model error or unusable answer falls back to the
//! top search result.

use crate::gemini::GeminiClient;
use crate::search::SearchCandidate;

/// Builds the disambiguation prompt: one numbered line per candidate,
/// followed by the instruction to answer with only the official sales URL.
pub(crate) fn build_prompt(query: &str, candidates: &[SearchCandidate]) -> String {
    let mut prompt = format!(
        "Analiza estos resultados para '{query}'. Busca la WEB OFICIAL DE VENTA. \
         Responde SOLO la URL.\n"
    );
    for (i, candidate) in candidates.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. Título: {} | Link: {} | Snippet: {}\n",
            i + 1,
            candidate.title,
            candidate.link,
            candidate.snippet
        ));
    }
    prompt
}

/// Extracts a URL from the model's free-text reply.
///
/// Strips backtick formatting, takes the first whitespace-delimited token,
/// and accepts it only if it starts with an `http` scheme prefix. Returns
/// `None` for anything else — empty replies, prose, bare domains.
pub(crate) fn parse_model_answer(answer: &str) -> Option<String> {
    let cleaned = answer.trim().replace('`', "");
    let first = cleaned.split_whitespace().next()?;
    if first.starts_with("http") {
        Some(first.to_owned())
    } else {
        None
    }
}

/// Chooses the official storefront URL for `query` among `candidates`.
///
/// Returns `None` only when `candidates` is empty. A model failure or an
/// unusable answer degrades to the first candidate's link, so callers with
/// at least one candidate always get a URL back.
pub async fn pick_official_url(
    gemini: &GeminiClient,
    query: &str,
    candidates: &[SearchCandidate],
) -> Option<String> {
    let first = candidates.first()?;

    let prompt = build_prompt(query, candidates);
    match gemini.generate(&prompt).await {
        Ok(answer) => {
            if let Some(url) = parse_model_answer(&answer) {
                tracing::debug!(query, url = %url, "model selected storefront URL");
                Some(url)
            } else {
                tracing::warn!(
                    query,
                    answer = %answer,
                    "model reply is not a URL; falling back to top search result"
                );
                Some(first.link.clone())
            }
        }
        Err(e) => {
            tracing::warn!(
                query,
                error = %e,
                "model call failed; falling back to top search result"
            );
            Some(first.link.clone())
        }
    }
}

#[cfg(test)]
#[path = "disambiguate_test.rs"]
mod tests;
