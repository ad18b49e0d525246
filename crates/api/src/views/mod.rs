//! Server-rendered HTML pages.
//!
//! Pages are plain `format!` strings wrapped in a shared layout. Every value
//! coming from an article or a request goes through [`escape`] (text and
//! attributes) or [`article_href`] (URLs) before it is interpolated.

pub mod admin;
pub mod articles;
pub mod auth;

use axum::response::Html;
use quill_core::article::ArticleId;

/// Wrap `body` in the site layout.
pub fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\
<html><head><meta charset=\"utf-8\"><title>{title} - Quill</title></head>\
<body>\
<header><a href=\"/\">Quill</a></header>\
<main>{body}</main>\
</body></html>",
        title = escape(title),
    ))
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build `{prefix}/{id}.json` with the file name percent-encoded as one path
/// segment.
///
/// Links always carry the extension: [`ArticleId::parse`] strips exactly one
/// `.json`, so an identity that itself ends in `.json` still round-trips.
pub fn article_href(prefix: &str, id: &ArticleId) -> String {
    let mut href = format!("{prefix}/");
    for byte in id.file_name().bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            href.push(byte as char);
        } else {
            href.push_str(&format!("%{byte:02X}"));
        }
    }
    href
}
