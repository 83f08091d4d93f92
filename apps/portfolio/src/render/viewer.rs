use crate::render::{document, escape_html};
use crate::theme::Theme;

pub const NO_DOCUMENT_MESSAGE: &str = "No document provided.";

/// Renders the document viewer. A missing or blank `file` yields only the
/// placeholder; otherwise the reference is embedded as-is in a full-page frame.
pub fn render_viewer(file: Option<&str>, theme: Theme) -> String {
    let Some(file) = file.filter(|f| !f.trim().is_empty()) else {
        return document(
            "Document Viewer",
            theme,
            &format!("<div class=\"p-6\">{NO_DOCUMENT_MESSAGE}</div>"),
        );
    };

    let body = format!(
        r#"<div class="h-screen w-screen flex flex-col">
<div class="flex justify-between items-center">
<h1>Document Viewer</h1>
<button type="button" onclick="history.back()">← Back</button>
</div>
<iframe src="{src}" class="flex-1 w-full" style="border: none" title="Document"></iframe>
</div>"#,
        src = escape_html(file)
    );
    document("Document Viewer", theme, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_renders_placeholder_only() {
        for file in [None, Some(""), Some("   ")] {
            let html = render_viewer(file, Theme::Dark);
            assert!(html.contains(NO_DOCUMENT_MESSAGE));
            assert!(!html.contains("<iframe"));
            assert!(!html.contains("Back"));
        }
    }

    #[test]
    fn test_file_is_embedded() {
        let html = render_viewer(Some("docs/Roverex.pdf"), Theme::Light);
        assert!(html.contains(r#"<iframe src="docs/Roverex.pdf""#));
        assert!(html.contains("history.back()"));
        assert!(!html.contains(NO_DOCUMENT_MESSAGE));
    }

    #[test]
    fn test_file_attribute_is_escaped() {
        let html = render_viewer(Some(r#"x" onload="alert(1)"#), Theme::Dark);
        assert!(html.contains(r#"src="x&quot; onload=&quot;alert(1)""#));
    }
}
