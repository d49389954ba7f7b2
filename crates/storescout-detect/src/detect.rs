use crate::signatures::COMPILED;

/// Classify page markup against the platform signature table.
///
/// Lowercases the markup once, then walks the table in order; a platform
/// is included when any of its patterns matches and its confirmation
/// predicate (if any) accepts the markup. The returned names preserve
/// table order, so the first element is the primary classification when
/// several platforms match. Empty markup yields an empty vec.
#[must_use]
pub fn detect_platforms(html: &str) -> Vec<&'static str> {
    if html.is_empty() {
        return Vec::new();
    }
    let html_lower = html.to_lowercase();

    let mut found = Vec::new();
    for sig in COMPILED.iter() {
        if !sig.patterns.iter().any(|re| re.is_match(&html_lower)) {
            continue;
        }
        if let Some(confirm) = sig.confirm {
            if !confirm(&html_lower) {
                continue;
            }
        }
        found.push(sig.name);
    }
    found
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
