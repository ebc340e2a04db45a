//! Assistant answer rendering.
//!
//! Answers are Markdown produced by a language model and may echo text from
//! an uploaded manual. Raw HTML is dropped and link or image destinations
//! outside a small scheme allowlist are replaced, so the output is safe for
//! `inner_html`.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Destination used in place of a rejected link or image URL.
pub const BLOCKED_DESTINATION: &str = "#";

/// Render `markdown` to HTML with raw HTML events removed and unsafe
/// destinations neutralised.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: checked_destination(dest_url, false),
            title,
            id,
        })),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: checked_destination(dest_url, true),
            title,
            id,
        })),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn checked_destination(url: CowStr<'_>, image: bool) -> CowStr<'_> {
    if is_safe_destination(&url, image) { url } else { CowStr::Borrowed(BLOCKED_DESTINATION) }
}

/// Relative URLs and `http`, `https`, `mailto` are allowed; images may also
/// be inline `data:image/` payloads. Browsers ignore tabs, newlines and
/// leading control characters in a scheme, so those are stripped first.
pub fn is_safe_destination(url: &str, image: bool) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    let scheme_end = cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    let Some(end) = scheme_end.filter(|&i| cleaned[i..].starts_with(':')) else {
        return true;
    };
    match &cleaned[..end] {
        "http" | "https" | "mailto" => true,
        "data" => image && cleaned.starts_with("data:image/"),
        _ => false,
    }
}

/// `src` for a base64 PNG returned with an answer.
pub fn png_data_url(payload: &str) -> String {
    if payload.starts_with("data:") {
        return payload.to_owned();
    }
    format!("data:image/png;base64,{payload}")
}
