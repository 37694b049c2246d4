use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex literal"));

/// Lowercases the query and splits it on runs of whitespace.
///
/// Leading or trailing whitespace yields empty terms; scorers skip them.
pub fn tokenize_query(query: &str) -> Vec<String> {
    WHITESPACE
        .split(&query.to_lowercase())
        .map(str::to_string)
        .collect()
}
