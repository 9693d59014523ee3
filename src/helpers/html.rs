//! HTML text helpers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}

/// Plain-text summary of rendered HTML, cut on a word boundary
///
/// Text no longer than `length` characters is returned whole; otherwise the
/// last complete word that fits is kept and `…` appended.
pub fn prune_excerpt(html: &str, length: usize) -> String {
    let stripped = strip_html(html);
    let text = html_escape::decode_html_entities(&stripped);
    let text = WHITESPACE.replace_all(text.trim(), " ");

    if text.chars().count() <= length {
        return text.into_owned();
    }

    let cut: String = text.chars().take(length).collect();
    // A word ending exactly at the limit is complete when a space follows it
    let ends_on_boundary = text.chars().nth(length).is_some_and(char::is_whitespace);
    let cut = match cut.rfind(' ') {
        _ if ends_on_boundary => cut.as_str(),
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };

    format!("{}…", cut.trim_end_matches(|c: char| c.is_whitespace() || c == ','))
}
