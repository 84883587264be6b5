//! Markdown rendering for legal and content pages
//!
//! Uses pulldown-cmark to parse Markdown and renders it as HTML elements.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown content as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: String,
) -> impl IntoView {
    let html = parse_markdown(&content);

    view! {
        <div
            class="markdown-content max-w-none"
            inner_html=html
        />
    }
}

/// Parse markdown string to HTML
///
/// Supports the subset our documents use: headings, paragraphs, lists,
/// emphasis, links, blockquotes, tables, rules and inline code. Raw HTML
/// in the source is dropped.
pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html_output.push_str("<p class=\"mb-3 last:mb-0\">"),
                Tag::Heading { level, .. } => {
                    let (class, tag) = match level {
                        HeadingLevel::H1 => ("text-3xl font-bold mb-4 mt-6", "h1"),
                        HeadingLevel::H2 => ("text-2xl font-bold mb-3 mt-6", "h2"),
                        HeadingLevel::H3 => ("text-xl font-semibold mb-2 mt-4", "h3"),
                        HeadingLevel::H4 => ("text-lg font-semibold mb-2 mt-3", "h4"),
                        HeadingLevel::H5 => ("text-base font-medium mb-1 mt-2", "h5"),
                        HeadingLevel::H6 => ("text-sm font-medium mb-1 mt-2", "h6"),
                    };
                    html_output.push_str(&format!("<{} class=\"{}\">", tag, class));
                }
                Tag::BlockQuote(_) => {
                    html_output.push_str("<blockquote class=\"border-l-4 border-accent-primary pl-4 my-3 text-theme-secondary italic\">");
                }
                Tag::CodeBlock(_) => {
                    // Text events inside are escaped individually, no
                    // buffering needed
                    html_output.push_str(
                        "<pre class=\"bg-theme-secondary rounded-lg p-3 my-3 overflow-x-auto\"><code class=\"text-sm font-mono\">",
                    );
                }
                Tag::List(Some(_)) => {
                    html_output.push_str("<ol class=\"list-decimal list-inside mb-3 space-y-1\">");
                }
                Tag::List(None) => {
                    html_output.push_str("<ul class=\"list-disc list-inside mb-3 space-y-1\">");
                }
                Tag::Item => html_output.push_str("<li class=\"text-theme-primary\">"),
                Tag::Emphasis => html_output.push_str("<em class=\"italic\">"),
                Tag::Strong => html_output.push_str("<strong class=\"font-semibold\">"),
                Tag::Strikethrough => html_output.push_str("<del class=\"line-through\">"),
                Tag::Link {
                    dest_url, title, ..
                } => {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(" title=\"{}\"", escape_html(&title))
                    };
                    html_output.push_str(&format!(
                        "<a href=\"{}\" class=\"text-accent-primary hover:underline\"{}>",
                        escape_html(&dest_url),
                        title_attr
                    ));
                }
                Tag::Table(_) => {
                    html_output.push_str("<div class=\"overflow-x-auto my-3\"><table class=\"min-w-full border border-theme rounded\">");
                }
                Tag::TableHead => {
                    html_output.push_str("<thead class=\"bg-theme-secondary\">");
                }
                Tag::TableRow => html_output.push_str("<tr>"),
                Tag::TableCell => {
                    html_output
                        .push_str("<td class=\"px-3 py-1.5 border-b border-theme text-sm\">");
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => html_output.push_str("</p>"),
                TagEnd::Heading(level) => {
                    let tag = match level {
                        HeadingLevel::H1 => "h1",
                        HeadingLevel::H2 => "h2",
                        HeadingLevel::H3 => "h3",
                        HeadingLevel::H4 => "h4",
                        HeadingLevel::H5 => "h5",
                        HeadingLevel::H6 => "h6",
                    };
                    html_output.push_str(&format!("</{}>", tag));
                }
                TagEnd::BlockQuote(_) => html_output.push_str("</blockquote>"),
                TagEnd::CodeBlock => html_output.push_str("</code></pre>"),
                TagEnd::List(true) => html_output.push_str("</ol>"),
                TagEnd::List(false) => html_output.push_str("</ul>"),
                TagEnd::Item => html_output.push_str("</li>"),
                TagEnd::Emphasis => html_output.push_str("</em>"),
                TagEnd::Strong => html_output.push_str("</strong>"),
                TagEnd::Strikethrough => html_output.push_str("</del>"),
                TagEnd::Link => html_output.push_str("</a>"),
                TagEnd::Table => html_output.push_str("</tbody></table></div>"),
                TagEnd::TableHead => html_output.push_str("</thead><tbody>"),
                TagEnd::TableRow => html_output.push_str("</tr>"),
                TagEnd::TableCell => html_output.push_str("</td>"),
                _ => {}
            },
            Event::Text(text) => {
                html_output.push_str(&escape_html(&text));
            }
            Event::Code(code) => {
                html_output.push_str(&format!(
                    "<code class=\"bg-theme-secondary px-1.5 py-0.5 rounded text-sm font-mono\">{}</code>",
                    escape_html(&code)
                ));
            }
            Event::Html(_) | Event::InlineHtml(_) => {
                // Raw HTML is not used by our documents
            }
            Event::SoftBreak => html_output.push(' '),
            Event::HardBreak => html_output.push_str("<br />"),
            Event::Rule => {
                html_output.push_str("<hr class=\"my-6 border-theme\" />");
            }
            _ => {}
        }
    }

    html_output
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        let html = parse_markdown("Welcome to ClipBridge.");
        assert!(html.contains("<p"));
        assert!(html.contains("Welcome to ClipBridge."));
        assert!(html.contains("</p>"));
    }

    #[test]
    fn test_bold_text() {
        let html = parse_markdown("You **must not** resell access");
        assert!(html.contains("<strong"));
        assert!(html.contains("must not"));
        assert!(html.contains("</strong>"));
    }

    #[test]
    fn test_heading() {
        let html = parse_markdown("## Acceptable Use");
        assert!(html.contains("<h2"));
        assert!(html.contains("Acceptable Use"));
        assert!(html.contains("</h2>"));
    }

    #[test]
    fn test_unordered_list() {
        let html = parse_markdown("- Upload rights\n- Usage rights\n- Payment terms");
        assert!(html.contains("<ul"));
        assert!(html.contains("<li"));
        assert!(html.contains("Upload rights"));
        assert!(html.contains("</ul>"));
    }

    #[test]
    fn test_link() {
        let html = parse_markdown("[contact us](mailto:legal@clipbridge.example)");
        assert!(html.contains("<a"));
        assert!(html.contains("href=\"mailto:legal@clipbridge.example\""));
        assert!(html.contains("contact us"));
        assert!(html.contains("</a>"));
    }

    #[test]
    fn test_table() {
        let md = "| Data | Retention |\n| --- | --- |\n| Sessions | 30 days |";
        let html = parse_markdown(md);
        assert!(html.contains("<table"));
        assert!(html.contains("<thead"));
        assert!(html.contains("<tbody>"));
        assert!(html.contains("Retention"));
        assert!(html.contains("</table>"));
    }

    #[test]
    fn test_raw_html_is_dropped() {
        let html = parse_markdown("before\n\n<script>alert('xss')</script>\n\nafter");
        assert!(!html.contains("<script>"));
        assert!(html.contains("before"));
        assert!(html.contains("after"));
    }

    #[test]
    fn test_escape_html() {
        let escaped = escape_html("<script>alert('xss')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(escaped.contains("&lt;"));
        assert!(escaped.contains("&gt;"));
    }

    #[test]
    fn test_legal_document_shape() {
        let md = r#"
# Terms of Service

_Last updated: March 2025_

## 1. Accounts

You are responsible for your account credentials.

- Keep your password secret
- Notify us of unauthorized use

---

## 2. Content

Clips you upload stay **yours**.
"#;
        let html = parse_markdown(md);
        assert!(html.contains("<h1"));
        assert!(html.contains("<h2"));
        assert!(html.contains("<em"));
        assert!(html.contains("<ul"));
        assert!(html.contains("<hr"));
        assert!(html.contains("<strong"));
    }
}
