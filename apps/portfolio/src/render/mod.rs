// View layer: server-side HTML for the portfolio page and the document viewer.
// All interpolated data passes through `escape_html`; query values through `encode_component`.

pub mod sections;
pub mod viewer;

use crate::theme::Theme;

pub use sections::{render_portfolio_page, PageContext};
pub use viewer::render_viewer;

/// Wraps `body` in a full HTML document. The theme lands on `<html>` as the
/// `dark` class, which is what the stylesheet keys on.
pub fn document(title: &str, theme: Theme, body: &str) -> String {
    let class = if theme.is_dark() { " class=\"dark\"" } else { "" };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"{class}>\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"/index.css\">\n\
         </head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(title)
    )
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encodes a query-string component (RFC 3986 unreserved set kept).
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// `/?q=..&tag=..` for the given inputs, omitting empty parameters.
pub fn index_href(query: &str, tag: &str) -> String {
    let params: Vec<String> = [("q", query), ("tag", tag)]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={}", encode_component(v)))
        .collect();
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("RoverEx — CO₂"), "RoverEx — CO₂");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("docs/Roverex.pdf"), "docs%2FRoverex.pdf");
        assert_eq!(encode_component("raspberry pi"), "raspberry%20pi");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_index_href_omits_empty() {
        assert_eq!(index_href("", ""), "/");
        assert_eq!(index_href("", "cad"), "/?tag=cad");
        assert_eq!(index_href("moon base", "cad"), "/?q=moon%20base&tag=cad");
    }

    #[test]
    fn test_document_applies_theme_class() {
        assert!(document("T", Theme::Dark, "").contains("<html lang=\"en\" class=\"dark\">"));
        assert!(document("T", Theme::Light, "").contains("<html lang=\"en\">"));
    }
}
