//! HTML rendering for the single-page web surface.
//!
//! The page has three states that can combine: the empty form, a rendered
//! report, and an error banner. Every interpolated value is escaped.

use crate::models::report::{Report, SearchLink};

#[derive(Debug, Default)]
pub struct PageView<'a> {
    /// Echoed back into the textarea.
    pub fragment: Option<&'a str>,
    pub report: Option<&'a Report>,
    pub error: Option<&'a str>,
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Archeologist</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
textarea { width: 100%; min-height: 6rem; }
blockquote { border-left: 4px solid #ccc; margin: 0.5rem 0; padding-left: 1rem; }
.error { background: #fdecea; border: 1px solid #f5c2c0; padding: 0.75rem; }
</style>
</head>
<body>
<h1>AI Archeologist</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::from(PAGE_HEAD);

    if let Some(error) = view.error {
        html.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape_html(error)
        ));
    }

    html.push_str(&format!(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"fragment\">Fragment</label>\n\
         <textarea id=\"fragment\" name=\"fragment\">{}</textarea>\n\
         <button type=\"submit\">Reconstruct</button>\n\
         </form>\n",
        escape_html(view.fragment.unwrap_or_default())
    ));

    if let Some(report) = view.report {
        render_report(&mut html, report);
    }

    html.push_str(PAGE_TAIL);
    html
}

fn render_report(html: &mut String, report: &Report) {
    html.push_str("<section id=\"report\">\n<h2>Reconstruction report</h2>\n");
    html.push_str(&format!(
        "<h3>Original fragment</h3>\n<blockquote>{}</blockquote>\n",
        escape_html(&report.original)
    ));
    html.push_str(&format!(
        "<h3>AI-reconstructed text</h3>\n<blockquote>{}</blockquote>\n",
        escape_html(&report.reconstructed)
    ));

    if !report.explanations.is_empty() {
        html.push_str("<h3>Explanations</h3>\n<ul class=\"explanations\">\n");
        for explanation in &report.explanations {
            html.push_str(&format!("<li>{}</li>\n", escape_html(explanation)));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("<h3>Contextual sources</h3>\n<ul class=\"sources\">\n");
    for link in &report.links {
        html.push_str(&render_link(link));
    }
    html.push_str("</ul>\n</section>\n");
}

fn render_link(link: &SearchLink) -> String {
    let title = link.title.as_deref().unwrap_or_default();
    match link.link.as_deref() {
        Some(href) => format!(
            "<li><a href=\"{}\" rel=\"noopener noreferrer\">{}</a> ({})</li>\n",
            escape_html(href),
            escape_html(href),
            escape_html(title)
        ),
        None => format!("<li>({})</li>\n", escape_html(title)),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
