//! Integration tests for `SearchClient` using wiremock HTTP mocks.

use serde_json::json;
use storescout_resolve::{ResolveError, SearchClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SearchClient {
    SearchClient::with_base_url("test-key", "test-cx", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_returns_parsed_candidates() {
    let server = MockServer::start().await;

    let body = json!({
        "items": [
            {
                "title": "Acme | Tienda oficial",
                "link": "https://acmestore.com",
                "snippet": "Compra en la tienda oficial de Acme."
            },
            {
                "title": "Acme en BigMart",
                "link": "https://bigmart.com/acme",
                "snippet": "Productos Acme en BigMart."
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("q", "Acme tienda oficial"))
        .and(query_param("key", "test-key"))
        .and(query_param("cx", "test-cx"))
        .and(query_param("num", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let candidates = test_client(&server.uri())
        .search("Acme")
        .await
        .expect("should parse search results");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].title, "Acme | Tienda oficial");
    assert_eq!(candidates[0].link, "https://acmestore.com");
    assert_eq!(candidates[1].snippet, "Productos Acme en BigMart.");
}

#[tokio::test]
async fn search_without_items_returns_empty() {
    let server = MockServer::start().await;

    // The API omits "items" entirely when nothing matched.
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "searchInformation": { "totalResults": "0" }
        })))
        .mount(&server)
        .await;

    let candidates = test_client(&server.uri())
        .search("Nonexistent Brand")
        .await
        .expect("missing items should parse as empty");

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn search_fills_missing_candidate_fields_with_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "items": [ { "link": "https://acmestore.com" } ]
        })))
        .mount(&server)
        .await;

    let candidates = test_client(&server.uri())
        .search("Acme")
        .await
        .expect("partial candidates should parse");

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].link, "https://acmestore.com");
    assert_eq!(candidates[0].title, "");
    assert_eq!(candidates[0].snippet, "");
}

#[tokio::test]
async fn search_surfaces_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&json!({
            "error": { "message": "quota exceeded" }
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search("Acme")
        .await
        .expect_err("403 should be an error");

    assert!(
        matches!(err, ResolveError::UnexpectedStatus { status: 403, .. }),
        "expected UnexpectedStatus(403), got: {err:?}"
    );
}

#[tokio::test]
async fn search_surfaces_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search("Acme")
        .await
        .expect_err("non-JSON body should be an error");

    assert!(
        matches!(err, ResolveError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}
