// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering and shortcode expansion.
//!
//! Content pages (FAQ, policies) and partials (footer) are markdown. Before
//! rendering, `{{ name key="value" /}}` shortcodes are expanded so a page can
//! pull in generated fragments such as the topics timeline.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html::push_html};
use std::collections::HashMap;

// ─── Markdown rendering ──────────────────────────────────────────────────────

/// Render markdown to HTML.
///
/// GFM tables, strikethrough and task lists are enabled. Raw HTML passes
/// through. Headings get a slug `id`; h2 and below also get a `#` anchor.
pub fn render_markdown(content: &str) -> String {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(content, options);
    let events = inject_heading_anchors(parser);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Render a single paragraph-sized snippet, dropping the outer `<p>` when
/// the snippet is exactly one paragraph.
pub fn render_inline(content: &str) -> String {
    let html = render_markdown(content);
    let trimmed = html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => html,
    }
}

/// Lowercase, collapse non-alphanumeric runs to `-`, trim hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn heading_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Buffer each heading's events, then re-emit it as `<hN id="slug">`.
fn inject_heading_anchors<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut in_heading: Option<HeadingLevel> = None;
    let mut heading_text = String::new();
    let mut heading_events: Vec<Event<'a>> = Vec::new();

    for event in parser {
        match &event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(*level);
                heading_text.clear();
                heading_events.clear();
                heading_events.push(event);
            }
            Event::End(TagEnd::Heading(level)) if in_heading == Some(*level) => {
                let slug = slugify(&heading_text);
                let n = heading_number(*level);

                if slug.is_empty() {
                    events.append(&mut heading_events);
                    events.push(event);
                } else {
                    events.push(Event::Html(format!("<h{} id=\"{}\">", n, slug).into()));
                    events.extend(heading_events.drain(..).skip(1));
                    if n >= 2 {
                        events.push(Event::Html(
                            format!(
                                " <a class=\"anchor\" href=\"#{}\" aria-hidden=\"true\">#</a>",
                                slug
                            )
                            .into(),
                        ));
                    }
                    events.push(Event::Html(format!("</h{}>", n).into()));
                }
                in_heading = None;
            }
            Event::Text(text) | Event::Code(text) if in_heading.is_some() => {
                heading_text.push_str(text);
                heading_events.push(event);
            }
            _ if in_heading.is_some() => heading_events.push(event),
            _ => events.push(event),
        }
    }

    events
}

// ─── Shortcodes ──────────────────────────────────────────────────────────────

/// A registered shortcode function.
pub type ShortcodeFn = Box<dyn Fn(&ShortcodeArgs) -> String + Send + Sync>;

/// Registry of named shortcode functions.
#[derive(Default)]
pub struct Shortcodes(HashMap<String, ShortcodeFn>);

impl Shortcodes {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn register<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&ShortcodeArgs) -> String + Send + Sync + 'static,
    {
        self.0.insert(name.to_string(), Box::new(func));
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn get(&self, name: &str) -> Option<&ShortcodeFn> {
        self.0.get(name)
    }
}

/// Parsed `key="value"` arguments of one shortcode invocation.
#[derive(Debug, Default)]
pub struct ShortcodeArgs(HashMap<String, String>);

impl ShortcodeArgs {
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Expand `{{ name key="value" /}}` shortcodes.
///
/// The trailing `/` is optional. `\{{` produces a literal `{{`, and text
/// between braces that is not a valid name is left alone. Unknown names
/// are an error.
pub fn preprocess_shortcodes(content: &str, shortcodes: &Shortcodes) -> Result<String, String> {
    let mut output = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("{{") {
        if start > 0 && rest.as_bytes()[start - 1] == b'\\' {
            output.push_str(&rest[..start - 1]);
            output.push_str("{{");
            rest = &rest[start + 2..];
            continue;
        }

        output.push_str(&rest[..start]);
        let remaining = &rest[start + 2..];
        let Some(tag_end) = remaining.find("}}") else {
            output.push_str("{{");
            rest = remaining;
            continue;
        };

        let body = remaining[..tag_end].trim();
        let body = body.strip_suffix('/').map(str::trim).unwrap_or(body);

        let (name, args_str) = match body.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (body, ""),
        };

        if !is_valid_name(name) {
            output.push_str("{{");
            rest = remaining;
            continue;
        }

        let func = shortcodes
            .get(name)
            .ok_or_else(|| format!("Unknown shortcode: '{}'", name))?;
        let args = parse_args(args_str)?;
        output.push_str(&func(&ShortcodeArgs(args)));
        rest = &remaining[tag_end + 2..];
    }

    output.push_str(rest);
    Ok(output)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// `[A-Za-z_][A-Za-z0-9_]+`
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    name.len() >= 2 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse `key="value" key2='value2' bare=word`.
fn parse_args(input: &str) -> Result<HashMap<String, String>, String> {
    let mut args = HashMap::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' || c.is_whitespace() {
                break;
            }
            key.push(c);
            chars.next();
        }
        if chars.next() != Some('=') {
            return Err(format!("Expected '=' after argument '{}'", key));
        }

        let mut value = String::new();
        match chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => match chars.next() {
                            Some('n') => value.push('\n'),
                            Some('t') => value.push('\t'),
                            Some(esc @ ('"' | '\'' | '\\')) => value.push(esc),
                            Some(other) => {
                                value.push('\\');
                                value.push(other);
                            }
                            None => break,
                        },
                        c if c == quote => {
                            closed = true;
                            break;
                        }
                        c => value.push(c),
                    }
                }
                if !closed {
                    return Err("Unclosed quote in argument value".to_string());
                }
            }
            _ => {
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    value.push(c);
                    chars.next();
                }
            }
        }
        args.insert(key, value);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basic() {
        let html = render_markdown("# Hello\n\nWorld");
        assert!(html.contains(r#"<h1 id="hello">"#));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_heading_anchors() {
        let html = render_markdown("## Getting to Boston\n\nBy train.\n");
        assert!(html.contains(r#"<h2 id="getting-to-boston">"#), "{}", html);
        assert!(html.contains(r##"href="#getting-to-boston""##), "{}", html);
        assert!(html.contains("By train."));
    }

    #[test]
    fn test_h1_has_no_anchor_link() {
        let html = render_markdown("# FAQ\n");
        assert!(html.contains(r#"<h1 id="faq">"#));
        assert!(!html.contains("class=\"anchor\""));
    }

    #[test]
    fn test_render_inline_strips_paragraph() {
        assert_eq!(render_inline("free *and* open"), "free <em>and</em> open");
        let two = render_inline("one\n\ntwo");
        assert!(two.contains("<p>one</p>"));
        assert!(two.contains("<p>two</p>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render_markdown("<div class=\"card\">x</div>\n");
        assert!(html.contains("<div class=\"card\">x</div>"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("How to get there?"), "how-to-get-there");
        assert_eq!(slugify("About & Topics"), "about-topics");
        assert_eq!(slugify("  Leading & Trailing  "), "leading-trailing");
        assert_eq!(slugify("DevConf2020"), "devconf2020");
    }

    #[test]
    fn test_shortcode_self_closing() {
        let mut sc = Shortcodes::new();
        sc.register("hello", |_args: &ShortcodeArgs| "HELLO".to_string());
        assert_eq!(
            preprocess_shortcodes("before {{ hello /}} after", &sc).unwrap(),
            "before HELLO after"
        );
        assert_eq!(preprocess_shortcodes("{{hello}}", &sc).unwrap(), "HELLO");
    }

    #[test]
    fn test_shortcode_with_args() {
        let mut sc = Shortcodes::new();
        sc.register("greet", |args: &ShortcodeArgs| {
            format!("Hi {}", args.get_str("name").unwrap_or("?"))
        });
        assert_eq!(
            preprocess_shortcodes(r#"{{ greet name="Boston" /}}"#, &sc).unwrap(),
            "Hi Boston"
        );
    }

    #[test]
    fn test_shortcode_escape_and_non_names() {
        let sc = Shortcodes::new();
        assert_eq!(
            preprocess_shortcodes(r"\{{ literal }}", &sc).unwrap(),
            "{{ literal }}"
        );
        assert_eq!(preprocess_shortcodes("{{ 1 + 1 }}", &sc).unwrap(), "{{ 1 + 1 }}");
        assert_eq!(preprocess_shortcodes("open {{ only", &sc).unwrap(), "open {{ only");
    }

    #[test]
    fn test_unknown_shortcode_is_error() {
        let sc = Shortcodes::new();
        let err = preprocess_shortcodes("{{ schedule /}}", &sc).unwrap_err();
        assert!(err.contains("schedule"));
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(r#"path="/assets/a b.css" kind='x' bare=yes"#).unwrap();
        assert_eq!(args.get("path").unwrap(), "/assets/a b.css");
        assert_eq!(args.get("kind").unwrap(), "x");
        assert_eq!(args.get("bare").unwrap(), "yes");
        assert!(parse_args(r#"path="open"#).is_err());
        assert!(parse_args("novalue").is_err());
    }
}
