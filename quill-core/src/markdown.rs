use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

// Initialize syntax highlighting resources once
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-ocean.dark";

/// Convert a markdown body to HTML.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(content, options);

    let mut events = Vec::new();
    let mut code: Option<(String, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                code = Some((lang.to_string(), String::new()));
            }
            Event::End(TagEnd::CodeBlock) if code.is_some() => {
                if let Some((lang, body)) = code.take() {
                    events.push(Event::Html(highlight(&lang, &body).into()));
                }
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, body)) = code.as_mut() {
                    body.push_str(&text);
                }
            }
            // Anything else inside a fenced block is dropped.
            _ if code.is_some() => {}
            event => events.push(event),
        }
    }

    let mut out = String::with_capacity(content.len() * 2);
    html::push_html(&mut out, events.into_iter());
    out
}

fn highlight(lang: &str, code: &str) -> String {
    let token = lang.split_whitespace().next().unwrap_or("");
    let syntax = SYNTAX_SET.find_syntax_by_token(token).or_else(|| {
        // Fallback mappings for unsupported languages
        match token {
            "toml" => SYNTAX_SET.find_syntax_by_name("YAML"),
            _ => None,
        }
    });

    let plain = || format!("<pre><code>{}</code></pre>\n", html_escape::encode_text(code));

    match (syntax, THEME_SET.themes.get(CODE_THEME)) {
        (Some(syntax), Some(theme)) => {
            highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme).unwrap_or_else(|_| plain())
        }
        _ => plain(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_emphasis() {
        let html = render_markdown("Roses are *red*.\n\nViolets are **blue**.");
        assert_eq!(
            html,
            "<p>Roses are <em>red</em>.</p>\n<p>Violets are <strong>blue</strong>.</p>\n"
        );
    }

    #[test]
    fn test_tables_enabled() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_unknown_language_is_escaped() {
        let html = render_markdown("```nosuchlang\n<b>&</b>\n```\n");
        assert_eq!(html, "<pre><code>&lt;b&gt;&amp;&lt;/b&gt;\n</code></pre>\n");
    }

    #[test]
    fn test_known_language_is_highlighted() {
        let html = render_markdown("```rust\nfn main() {}\n```\n");
        assert!(html.starts_with("<pre style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_indented_code_is_untouched() {
        let html = render_markdown("    let x = 1;\n");
        assert_eq!(html, "<pre><code>let x = 1;\n</code></pre>\n");
    }
}
