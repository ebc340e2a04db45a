use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("Press **RESET**.\n\n1. Open\n2. Hold");
    assert!(html.contains("<strong>RESET</strong>"));
    assert!(html.contains("<ol>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after\n\n<div>block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("before"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

#[test]
fn script_links_are_neutralised_but_keep_their_text() {
    let html = render_markdown_html("[Open the manual](javascript:alert(localStorage.token))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r##"<a href="#">Open the manual</a>"##));

    let shouted = render_markdown_html("[x](JaVaScRiPt:alert(1)) and [y](vbscript:msgbox)");
    assert!(!shouted.to_ascii_lowercase().contains("script:"));
}

#[test]
fn ordinary_links_are_kept() {
    let html = render_markdown_html("See [docs](https://example.com/a?b=1), [help](/chat/5) or [mail](mailto:s@x.io).");
    assert!(html.contains(r#"href="https://example.com/a?b=1""#));
    assert!(html.contains(r#"href="/chat/5""#));
    assert!(html.contains(r#"href="mailto:s@x.io""#));
}

#[test]
fn images_allow_data_image_only() {
    let ok = render_markdown_html("![diagram](data:image/png;base64,iVBOR)");
    assert!(ok.contains(r#"src="data:image/png;base64,iVBOR""#));

    let html = render_markdown_html("![x](javascript:alert(1)) [y](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains("javascript:"));
    assert!(!html.contains("data:text/html"));
}

#[test]
fn destination_check_ignores_obfuscating_whitespace() {
    assert!(!is_safe_destination("java\tscript:alert(1)", false));
    assert!(!is_safe_destination("\u{1}javascript:alert(1)", false));
    assert!(is_safe_destination("relative/path:with-colon", false));
    assert!(is_safe_destination("#section", false));
    assert!(!is_safe_destination("data:image/png;base64,xx", false));
}

#[test]
fn png_data_url_wraps_bare_payload_once() {
    assert_eq!(png_data_url("iVBOR"), "data:image/png;base64,iVBOR");
    assert_eq!(png_data_url("data:image/jpeg;base64,xx"), "data:image/jpeg;base64,xx");
}
