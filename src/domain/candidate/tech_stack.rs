//! Tech-stack sanitizer.

/// Splits free text on commas into lower-cased, trimmed technology tokens.
///
/// Order is preserved and duplicates are kept. An empty result means the
/// input carried no usable token.
pub fn sanitize_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
