use super::*;

fn candidate(title: &str, link: &str, snippet: &str) -> SearchCandidate {
    SearchCandidate {
        title: title.to_owned(),
        link: link.to_owned(),
        snippet: snippet.to_owned(),
    }
}

#[test]
fn parse_accepts_plain_url() {
    assert_eq!(
        parse_model_answer("https://acmestore.com"),
        Some("https://acmestore.com".to_owned())
    );
}

#[test]
fn parse_strips_backticks_and_whitespace() {
    assert_eq!(
        parse_model_answer("  `https://acmestore.com`  \n"),
        Some("https://acmestore.com".to_owned())
    );
}

#[test]
fn parse_takes_first_token_of_verbose_reply() {
    assert_eq!(
        parse_model_answer("https://acmestore.com es la web oficial de venta"),
        Some("https://acmestore.com".to_owned())
    );
}

#[test]
fn parse_rejects_empty_reply() {
    assert_eq!(parse_model_answer(""), None);
    assert_eq!(parse_model_answer("   "), None);
}

#[test]
fn parse_rejects_non_url_reply() {
    assert_eq!(parse_model_answer("No encuentro la web oficial."), None);
}

#[test]
fn parse_rejects_bare_domain() {
    assert_eq!(parse_model_answer("acmestore.com"), None);
}

#[test]
fn prompt_enumerates_all_candidates() {
    let candidates = vec![
        candidate("Acme | Official", "https://acme.com", "Official Acme store"),
        candidate("Acme on BigMart", "https://bigmart.com/acme", "Buy Acme at BigMart"),
    ];
    let prompt = build_prompt("Acme", &candidates);

    assert!(prompt.contains("'Acme'"));
    assert!(prompt.contains("1. Título: Acme | Official | Link: https://acme.com"));
    assert!(prompt.contains("2. Título: Acme on BigMart | Link: https://bigmart.com/acme"));
    assert!(prompt.contains("Snippet: Buy Acme at BigMart"));
}
