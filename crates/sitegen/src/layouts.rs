// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layouts.
//!
//! Layouts wrap rendered page content in a complete HTML document: head
//! with social sharing tags and stylesheets, the content, and the footer
//! partial. Selected per page: landing pages use `landing`, markdown pages
//! pick one in their frontmatter (`layout: page`).

use crate::config::SiteMeta;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Crate version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context passed to layout functions.
pub struct LayoutContext<'a> {
    /// Page title
    pub title: &'a str,
    pub site: &'a SiteMeta,
    /// Source branch the site was built from
    pub branch: &'a str,
    /// Stylesheet URLs, already rewritten
    pub stylesheets: &'a [String],
    /// Social preview image URL, already rewritten
    pub image: Option<&'a str>,
    /// Rendered page content
    pub content: &'a str,
    /// Rendered footer partial
    pub footer: Option<&'a str>,
    /// Link target of the "home" link on content pages
    pub home_href: &'a str,
}

/// Apply a named layout. Unknown names use the `page` layout.
pub fn apply_layout(name: &str, ctx: &LayoutContext) -> String {
    let markup = match name {
        "landing" => landing_layout(ctx),
        _ => page_layout(ctx),
    };
    markup.into_string()
}

fn head(ctx: &LayoutContext) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            meta name="generator" content=(format!("devconf-sitegen v{}", VERSION));
            meta name="build-branch" content=(ctx.branch);
            @if !ctx.site.description.is_empty() {
                meta name="description" content=(ctx.site.description);
            }
            (social_meta(ctx))
            @for href in ctx.stylesheets {
                link rel="stylesheet" href=(href);
            }
            title { (ctx.title) }
        }
    }
}

/// OpenGraph and Twitter card tags.
fn social_meta(ctx: &LayoutContext) -> Markup {
    html! {
        meta property="og:title" content=(ctx.title);
        meta property="og:site_name" content=(ctx.site.site_name());
        @if !ctx.site.description.is_empty() {
            meta property="og:description" content=(ctx.site.description);
        }
        meta property="og:type" content="website";
        @if let Some(url) = &ctx.site.url {
            meta property="og:url" content=(url);
        }
        @if let Some(image) = ctx.image {
            meta property="og:image" content=(image);
            meta property="twitter:image" content=(image);
        }
    }
}

fn footer(ctx: &LayoutContext) -> Markup {
    html! {
        @if let Some(footer_html) = ctx.footer {
            footer class="site-footer" {
                (PreEscaped(footer_html))
            }
        }
    }
}

/// Layout for the conference landing page: the sections carry their own
/// masthead, so the body is just content and footer.
fn landing_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                (PreEscaped(ctx.content))
                (footer(ctx))
            }
        }
    }
}

/// Layout for content pages (FAQ, policies, travel details).
fn page_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                nav class="navbar navbar-dark page-nav" {
                    a href=(ctx.home_href) class="home mont-700" { (ctx.site.site_name()) }
                }
                main class="content-page mx-auto col-lg-8 py-5" {
                    article {
                        (PreEscaped(ctx.content))
                    }
                }
                (footer(ctx))
            }
        }
    }
}
