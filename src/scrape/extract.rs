use super::types::ScrapeResult;
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title\s*>").expect("valid regex literal"));
static H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").expect("valid regex literal"));
static META_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex literal"));
static NAME_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bname\s*=\s*["']?description["'\s/>]"#).expect("valid regex literal")
});
static CONTENT_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex literal")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid regex literal"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex literal"));

pub fn extract_page(html: &str) -> ScrapeResult {
    ScrapeResult {
        title: extract_title(html),
        meta_description: extract_meta_description(html),
        h1: extract_h1(html),
    }
}

pub fn extract_title(html: &str) -> Option<String> {
    let cap = TITLE.captures(html)?;
    clean_text(cap.get(1)?.as_str())
}

/// First `<h1>`, with any nested markup removed.
pub fn extract_h1(html: &str) -> Option<String> {
    let cap = H1.captures(html)?;
    clean_text(cap.get(1)?.as_str())
}

/// Content of the first `<meta name="description">`, in either attribute order.
pub fn extract_meta_description(html: &str) -> Option<String> {
    META_TAG
        .find_iter(html)
        .map(|tag| tag.as_str())
        .filter(|tag| NAME_DESCRIPTION.is_match(tag))
        .find_map(|tag| {
            let cap = CONTENT_ATTR.captures(tag)?;
            let value = cap.get(1).or_else(|| cap.get(2))?;
            clean_text(value.as_str())
        })
}

/// Strips tags, decodes basic entities and collapses whitespace.
fn clean_text(fragment: &str) -> Option<String> {
    let without_tags = TAG.replace_all(fragment, " ");
    let decoded = decode_entities(&without_tags);
    let collapsed = WHITESPACE.replace_all(&decoded, " ");
    let text = collapsed.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn decode_entities(text: &str) -> String {
    // &amp; last, so "&amp;lt;" stays "&lt;"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
